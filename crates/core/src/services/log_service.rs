use crate::dates::CalendarDate;
use crate::errors::CoreError;
use crate::models::entry::{EntrySortOrder, WeightEntry};
use crate::models::log::WeightLog;

/// Which branch an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No entry carried that date yet — the entry was appended
    Inserted,
    /// An entry with the same date text was overwritten in place
    Updated,
}

/// Manages the in-memory weight log: upserts keyed by date text, browse
/// sorts, and quick-filter search.
///
/// Pure business logic — no I/O, no API calls. The remote write endpoint
/// applies the same update-if-date-exists-else-insert rule, so a saved
/// entry lands in the same place on both sides.
pub struct LogService;

impl LogService {
    pub fn new() -> Self {
        Self
    }

    /// Insert `entry`, or overwrite the entry whose stored date text is an
    /// exact match. Validates the entry first.
    pub fn upsert(
        &self,
        log: &mut WeightLog,
        entry: WeightEntry,
    ) -> Result<UpsertOutcome, CoreError> {
        self.validate_entry(&entry)?;

        if let Some(existing) = log.entries.iter_mut().find(|e| e.date == entry.date) {
            *existing = entry;
            Ok(UpsertOutcome::Updated)
        } else {
            log.entries.push(entry);
            Ok(UpsertOutcome::Inserted)
        }
    }

    /// Exact date-text lookup — the edit flow loads entries this way.
    #[must_use]
    pub fn find_by_date<'a>(&self, log: &'a WeightLog, date_text: &str) -> Option<&'a WeightEntry> {
        log.entries.iter().find(|e| e.date == date_text)
    }

    /// Entries sorted for browsing.
    ///
    /// Date orders treat an unparseable date as incomparable: the entry
    /// keeps its original position instead of sorting to an arbitrary one.
    /// The grid still shows it — only the analytics windows exclude it.
    #[must_use]
    pub fn entries_sorted(&self, log: &WeightLog, order: &EntrySortOrder) -> Vec<WeightEntry> {
        match order {
            EntrySortOrder::DateDesc => Self::sorted_by_day(&log.entries, true),
            EntrySortOrder::DateAsc => Self::sorted_by_day(&log.entries, false),
            EntrySortOrder::WeightDesc => {
                let mut entries = log.entries.clone();
                entries.sort_by(|a, b| b.weight_lbs.total_cmp(&a.weight_lbs));
                entries
            }
            EntrySortOrder::WeightAsc => {
                let mut entries = log.entries.clone();
                entries.sort_by(|a, b| a.weight_lbs.total_cmp(&b.weight_lbs));
                entries
            }
        }
    }

    /// Case-insensitive quick filter across date text, weight, and notes.
    #[must_use]
    pub fn search(&self, log: &WeightLog, query: &str) -> Vec<WeightEntry> {
        let q = query.to_lowercase();
        log.entries
            .iter()
            .filter(|e| {
                e.date.to_lowercase().contains(&q)
                    || e.weight_lbs.to_string().contains(&q)
                    || e.notes_text().to_lowercase().contains(&q)
            })
            .cloned()
            .collect()
    }

    /// Weight of the entry with the latest usable date — the form defaults
    /// a new entry to this.
    #[must_use]
    pub fn last_recorded_weight(&self, log: &WeightLog) -> Option<f64> {
        log.entries
            .iter()
            .filter_map(|e| e.day().map(|day| (day, e.weight_lbs)))
            .max_by_key(|(day, _)| *day)
            .map(|(_, weight)| weight)
    }

    /// Rules: the weight must be a finite number and the date text must be
    /// canonical — the form always writes canonical text, so anything else
    /// is a malformed payload.
    fn validate_entry(&self, entry: &WeightEntry) -> Result<(), CoreError> {
        if !entry.weight_lbs.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Weight must be a finite number, got {}",
                entry.weight_lbs
            )));
        }
        if CalendarDate::parse(&entry.date).is_none() {
            return Err(CoreError::ValidationError(format!(
                "Entry date '{}' is not in MM/dd/yyyy form",
                entry.date
            )));
        }
        Ok(())
    }

    /// Date sort that leaves undated entries exactly where they were:
    /// dated entries are ordered among themselves and flow back into the
    /// slots dated entries occupied, undated slots are untouched.
    fn sorted_by_day(entries: &[WeightEntry], newest_first: bool) -> Vec<WeightEntry> {
        let mut dated: Vec<(usize, CalendarDate)> = entries
            .iter()
            .enumerate()
            .filter_map(|(idx, e)| e.day().map(|day| (idx, day)))
            .collect();

        if newest_first {
            dated.sort_by(|(i, a), (j, b)| b.cmp(a).then(i.cmp(j)));
        } else {
            dated.sort_by(|(i, a), (j, b)| a.cmp(b).then(i.cmp(j)));
        }

        let mut result: Vec<Option<WeightEntry>> = entries
            .iter()
            .map(|e| if e.day().is_none() { Some(e.clone()) } else { None })
            .collect();
        let dated_slots: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.day().is_some())
            .map(|(idx, _)| idx)
            .collect();
        for (slot, (source, _)) in dated_slots.into_iter().zip(dated) {
            result[slot] = Some(entries[source].clone());
        }
        result.into_iter().flatten().collect()
    }
}

impl Default for LogService {
    fn default() -> Self {
        Self::new()
    }
}

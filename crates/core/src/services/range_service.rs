use crate::dates::{self, CalendarDate};
use crate::models::entry::WeightEntry;
use crate::models::range::RangeSelection;

/// Days covered by [`RangeSelection::Trailing30Days`].
const TRAILING_WINDOW_DAYS: i64 = 30;

/// Filters the entry log into the window named by a [`RangeSelection`].
///
/// Pure business logic — no I/O, no clock. The reference day for relative
/// windows is always injected by the caller.
pub struct RangeService;

impl RangeService {
    pub fn new() -> Self {
        Self
    }

    /// Select the entries inside `selection`, chronologically ascending.
    ///
    /// Entries whose date text does not parse are excluded from every mode.
    /// The output order is a contract, not a convenience: `subset[0]` is
    /// the earliest entry, same-day entries keep their original relative
    /// order, and callers must hand the subset to the stats calculator
    /// without reordering it.
    #[must_use]
    pub fn select(
        &self,
        entries: &[WeightEntry],
        selection: &RangeSelection,
        now: CalendarDate,
    ) -> Vec<WeightEntry> {
        let mut dated: Vec<(CalendarDate, WeightEntry)> = entries
            .iter()
            .filter_map(|entry| entry.day().map(|day| (day, entry.clone())))
            .collect();

        match selection {
            RangeSelection::AllTime => {}
            RangeSelection::Trailing30Days => {
                let Ok(cutoff) = dates::sub_days(now, TRAILING_WINDOW_DAYS) else {
                    return Vec::new();
                };
                // Boundary day included: an entry exactly 30 days old stays in.
                dated.retain(|(day, _)| {
                    dates::equals(*day, cutoff) || dates::after(*day, cutoff)
                });
            }
            RangeSelection::Year(year) => {
                dated.retain(|(day, _)| day.year() == *year);
            }
            RangeSelection::Custom { start, end } => {
                dated.retain(|(day, _)| Self::within(*day, *start, *end));
            }
        }

        // Stable sort: same-day ties keep their original relative order.
        dated.sort_by(|(a, _), (b, _)| a.cmp(b));
        dated.into_iter().map(|(_, entry)| entry).collect()
    }

    /// Inclusive `[start, end]` membership; an absent bound leaves that
    /// side unconstrained.
    fn within(day: CalendarDate, start: Option<CalendarDate>, end: Option<CalendarDate>) -> bool {
        let on_or_after_start =
            start.map_or(true, |s| dates::equals(day, s) || dates::after(day, s));
        let on_or_before_end =
            end.map_or(true, |e| dates::equals(day, e) || dates::before(day, e));
        on_or_after_start && on_or_before_end
    }
}

impl Default for RangeService {
    fn default() -> Self {
        Self::new()
    }
}

pub mod dates;
pub mod errors;
pub mod models;
pub mod services;
pub mod source;

use dates::CalendarDate;
use errors::CoreError;
use models::{
    chart::ChartSeries,
    entry::{EntrySortOrder, WeightEntry},
    log::WeightLog,
    range::RangeSelection,
    settings::Settings,
    stats::TrendStats,
};
use services::{
    chart_service::ChartService,
    log_service::{LogService, UpsertOutcome},
    range_service::RangeService,
    stats_service::StatsService,
};
use source::traits::EntrySource;

/// Weight the form suggests before anything has been logged.
const DEFAULT_SUGGESTED_WEIGHT_LBS: f64 = 200.0;

/// Main entry point for the Weight Tracker core library.
/// Owns the entry log and all services that derive views from it.
#[must_use]
pub struct WeightTracker {
    log: WeightLog,
    settings: Settings,
    log_service: LogService,
    range_service: RangeService,
    stats_service: StatsService,
    chart_service: ChartService,
    /// Tracks whether any local mutation has occurred since the last
    /// load/replace from the entry source.
    dirty: bool,
}

impl std::fmt::Debug for WeightTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightTracker")
            .field("entries", &self.log.len())
            .field("settings", &self.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl WeightTracker {
    /// Create a tracker with an empty log and default settings.
    pub fn create_new() -> Self {
        Self::build(WeightLog::new())
    }

    /// Create a tracker over an already-fetched entry list.
    pub fn with_entries(entries: Vec<WeightEntry>) -> Self {
        Self::build(WeightLog::with_entries(entries))
    }

    // ── Entry Source ────────────────────────────────────────────────

    /// Replace the whole log with the remote table (wholesale reload).
    /// Returns the number of entries loaded and clears the unsaved flag.
    pub async fn load_from_source(
        &mut self,
        source: &dyn EntrySource,
    ) -> Result<usize, CoreError> {
        let entries = source.fetch_entries().await?;
        let count = entries.len();
        self.log = WeightLog::with_entries(entries);
        self.dirty = false;
        Ok(count)
    }

    /// Upsert one entry remotely, then apply the entry the server echoed
    /// back to the local log. The unsaved flag is left alone: this entry is
    /// persisted, earlier local-only edits (if any) still are not.
    pub async fn save_entry_to_source(
        &mut self,
        source: &dyn EntrySource,
        entry: WeightEntry,
    ) -> Result<UpsertOutcome, CoreError> {
        let stored = source.upsert_entry(&entry).await?;
        self.log_service.upsert(&mut self.log, stored)
    }

    // ── Log Management ──────────────────────────────────────────────

    /// Record a weigh-in locally: update the entry with the same date text,
    /// or append a new one.
    pub fn upsert_entry(&mut self, entry: WeightEntry) -> Result<UpsertOutcome, CoreError> {
        let outcome = self.log_service.upsert(&mut self.log, entry)?;
        self.dirty = true;
        Ok(outcome)
    }

    /// Get the entry stored under an exact date text, if any.
    #[must_use]
    pub fn get_entry(&self, date_text: &str) -> Option<&WeightEntry> {
        self.log_service.find_by_date(&self.log, date_text)
    }

    /// All entries in stored order.
    #[must_use]
    pub fn entries(&self) -> &[WeightEntry] {
        &self.log.entries
    }

    /// Entries for the browse grid: newest first, undated rows left in
    /// place.
    #[must_use]
    pub fn entries_for_grid(&self) -> Vec<WeightEntry> {
        self.log_service
            .entries_sorted(&self.log, &EntrySortOrder::DateDesc)
    }

    /// Entries sorted by a specific order.
    #[must_use]
    pub fn entries_sorted(&self, order: &EntrySortOrder) -> Vec<WeightEntry> {
        self.log_service.entries_sorted(&self.log, order)
    }

    /// Quick-filter search across date text, weight, and notes.
    #[must_use]
    pub fn search_entries(&self, query: &str) -> Vec<WeightEntry> {
        self.log_service.search(&self.log, query)
    }

    /// Total number of entries in the log.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.log.len()
    }

    /// Default weight for a new form entry: the last recorded weight, or
    /// the stock suggestion when the log is empty.
    #[must_use]
    pub fn suggested_weight(&self) -> f64 {
        self.log_service
            .last_recorded_weight(&self.log)
            .unwrap_or(DEFAULT_SUGGESTED_WEIGHT_LBS)
    }

    /// Day of the earliest dated entry, if any.
    #[must_use]
    pub fn earliest_entry_date(&self) -> Option<CalendarDate> {
        self.log.entries.iter().filter_map(|e| e.day()).min()
    }

    /// Day of the latest dated entry, if any.
    #[must_use]
    pub fn latest_entry_date(&self) -> Option<CalendarDate> {
        self.log.entries.iter().filter_map(|e| e.day()).max()
    }

    // ── Analytics ───────────────────────────────────────────────────
    // `now` is injected so the engine never reads a clock; the `*_today`
    // conveniences below read it here, at the UI-glue layer, only.

    /// The chronologically ascending window named by `selection`.
    #[must_use]
    pub fn entries_in_range(
        &self,
        selection: &RangeSelection,
        now: CalendarDate,
    ) -> Vec<WeightEntry> {
        self.range_service.select(&self.log.entries, selection, now)
    }

    /// Trend statistics for the selected window, using the configured
    /// height for BMI.
    #[must_use]
    pub fn trend_stats(&self, selection: &RangeSelection, now: CalendarDate) -> TrendStats {
        let window = self.entries_in_range(selection, now);
        self.stats_service
            .compute(&window, self.settings.height_inches)
    }

    /// Chart-ready series for the selected window.
    #[must_use]
    pub fn chart_series(&self, selection: &RangeSelection, now: CalendarDate) -> ChartSeries {
        let window = self.entries_in_range(selection, now);
        self.chart_service.series(&window)
    }

    /// Distinct calendar years present in the log (the year picker).
    #[must_use]
    pub fn unique_years(&self) -> Vec<i32> {
        self.chart_service.unique_years(&self.log.entries)
    }

    /// [`Self::entries_in_range`] anchored on the current UTC day.
    #[must_use]
    pub fn entries_in_range_today(&self, selection: &RangeSelection) -> Vec<WeightEntry> {
        self.entries_in_range(selection, Self::today())
    }

    /// [`Self::trend_stats`] anchored on the current UTC day.
    #[must_use]
    pub fn trend_stats_today(&self, selection: &RangeSelection) -> TrendStats {
        self.trend_stats(selection, Self::today())
    }

    /// [`Self::chart_series`] anchored on the current UTC day.
    #[must_use]
    pub fn chart_series_today(&self, selection: &RangeSelection) -> ChartSeries {
        self.chart_series(selection, Self::today())
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the height used for BMI. Must be a positive, finite number of
    /// inches.
    pub fn set_height_inches(&mut self, height_inches: f64) -> Result<(), CoreError> {
        if !height_inches.is_finite() || height_inches <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Invalid height '{height_inches}': must be a positive number of inches"
            )));
        }
        self.settings.height_inches = height_inches;
        self.dirty = true;
        Ok(())
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all entries as a JSON string in the wire shape.
    pub fn export_entries_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.log.entries).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize entries to JSON: {e}"))
        })
    }

    /// Import entries from a JSON string in the wire shape. Each entry is
    /// validated and upserted; if any fails, nothing is applied
    /// (all-or-nothing). Returns the number of entries imported.
    pub fn import_entries_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let entries: Vec<WeightEntry> = serde_json::from_str(json)?;
        let count = entries.len();

        // Phase 1: apply against a scratch copy so a late failure cannot
        // leave the log half-imported.
        let mut scratch = self.log.clone();
        for entry in entries {
            self.log_service.upsert(&mut scratch, entry)?;
        }

        // Phase 2: all valid — commit.
        self.log = scratch;
        self.dirty = true;
        Ok(count)
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the log or settings changed since the last reload
    /// from the entry source.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn today() -> CalendarDate {
        CalendarDate::from_date(chrono::Utc::now().date_naive())
    }

    fn build(log: WeightLog) -> Self {
        Self {
            log,
            settings: Settings::default(),
            log_service: LogService::new(),
            range_service: RangeService::new(),
            stats_service: StatsService::new(),
            chart_service: ChartService::new(),
            dirty: false,
        }
    }
}

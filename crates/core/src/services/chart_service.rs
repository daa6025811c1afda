use std::collections::BTreeSet;

use crate::models::chart::ChartSeries;
use crate::models::entry::WeightEntry;

/// Builds chart-ready data from a selected window of the log.
///
/// The core computes the arrays — the frontend only renders them.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Parallel label/weight arrays for `ordered` (earliest entry first).
    /// The arrays inherit the window's ascending order untouched.
    #[must_use]
    pub fn series(&self, ordered: &[WeightEntry]) -> ChartSeries {
        ChartSeries {
            labels: ordered.iter().map(|e| e.date.clone()).collect(),
            weights: ordered.iter().map(|e| e.weight_lbs).collect(),
        }
    }

    /// Distinct calendar years across the whole log, ascending — feeds the
    /// year picker. Entries without a usable date contribute nothing.
    #[must_use]
    pub fn unique_years(&self, entries: &[WeightEntry]) -> Vec<i32> {
        let years: BTreeSet<i32> = entries
            .iter()
            .filter_map(|e| e.day().map(|day| day.year()))
            .collect();
        years.into_iter().collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

use serde::{Deserialize, Serialize};

use super::entry::WeightEntry;

/// The main data container: the full weight log.
///
/// Single-writer by design — the facade owns one, replaces it wholesale on
/// reload from the entry source, and mutates it only through upserts.
/// Services receive read-only slices of `entries`, never the store itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightLog {
    /// All recorded entries, in stored order
    pub entries: Vec<WeightEntry>,
}

impl WeightLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<WeightEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use serde::{Deserialize, Serialize};

use crate::dates::CalendarDate;

/// Sort order for entry listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySortOrder {
    /// Newest date first (default for the browse grid)
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Heaviest first
    WeightDesc,
    /// Lightest first
    WeightAsc,
}

/// A single weight log record.
///
/// `date` keeps the canonical `MM/dd/yyyy` text exactly as it was stored.
/// An entry whose text does not parse has no usable date: every analytics
/// window skips it, and it compares as unordered in the grid. That is a
/// data-quality signal, never an error.
///
/// Serialized field names are the wire names of the entry endpoints:
/// `dt`, `lbs`, `notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Date of the weigh-in, canonical text
    #[serde(rename = "dt")]
    pub date: String,

    /// Weight in pounds
    #[serde(rename = "lbs")]
    pub weight_lbs: f64,

    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl WeightEntry {
    pub fn new(date: impl Into<String>, weight_lbs: f64) -> Self {
        Self {
            date: date.into(),
            weight_lbs,
            notes: None,
        }
    }

    /// Create an entry with notes attached.
    pub fn with_notes(
        date: impl Into<String>,
        weight_lbs: f64,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            weight_lbs,
            notes: Some(notes.into()),
        }
    }

    /// The parsed calendar day, if the stored text is usable.
    #[must_use]
    pub fn day(&self) -> Option<CalendarDate> {
        CalendarDate::parse(&self.date)
    }

    /// Notes as displayable text (empty when unset).
    #[must_use]
    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

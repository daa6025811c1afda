use serde::{Deserialize, Serialize};

use crate::dates::CalendarDate;

/// Which slice of the log a stats or chart computation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSelection {
    /// Every entry with a usable date
    AllTime,
    /// Entries dated within the last 30 calendar days, boundary day included
    Trailing30Days,
    /// Entries whose calendar year matches
    Year(i32),
    /// Inclusive `[start, end]`; an absent bound leaves that side open
    Custom {
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    },
}

impl std::fmt::Display for RangeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeSelection::AllTime => write!(f, "All Years"),
            RangeSelection::Trailing30Days => write!(f, "Last 30 Days"),
            RangeSelection::Year(year) => write!(f, "{year}"),
            RangeSelection::Custom { .. } => write!(f, "Custom"),
        }
    }
}

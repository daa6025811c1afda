use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Canonical textual date format used everywhere (form, grid, wire, chart
/// labels): `MM/dd/yyyy`.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// A calendar day with no usable time-of-day component.
///
/// Every constructor collapses its input to the underlying day, so two
/// values naming the same day compare equal no matter how they were built
/// (parsed from text vs. taken from a live timestamp). This is what makes
/// all comparisons in the crate calendar-day granular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse canonical `MM/dd/yyyy` text. `None` on malformed input —
    /// a bad date is data, not an error.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_with_format(text, DATE_FORMAT)
    }

    /// Parse with an alternate chrono format string.
    #[must_use]
    pub fn parse_with_format(text: &str, format: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(text, format).ok().map(Self)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Collapse a timestamp to its calendar day.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// The 23:59:59 anchor shared by every value naming this day. Callers
    /// that need a concrete timestamp (chart axes, pickers) use this.
    #[must_use]
    pub fn end_of_day(&self) -> NaiveDateTime {
        self.0
            .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default())
    }

    /// Canonical `MM/dd/yyyy` text.
    #[must_use]
    pub fn format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    /// Text in an alternate chrono format.
    #[must_use]
    pub fn format_with(&self, format: &str) -> String {
        self.0.format(format).to_string()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Anything the comparison, formatting, and arithmetic helpers accept:
/// canonical text, already-normalized values, chrono dates and timestamps,
/// and optional versions of each.
///
/// Resolution failure is a data-quality signal, not an error — the
/// comparison helpers treat unresolvable input as incomparable.
pub trait DateLike {
    fn resolve(&self) -> Option<CalendarDate>;
}

impl DateLike for CalendarDate {
    fn resolve(&self) -> Option<CalendarDate> {
        Some(*self)
    }
}

impl DateLike for &CalendarDate {
    fn resolve(&self) -> Option<CalendarDate> {
        Some(**self)
    }
}

impl DateLike for NaiveDate {
    fn resolve(&self) -> Option<CalendarDate> {
        Some(CalendarDate(*self))
    }
}

impl DateLike for NaiveDateTime {
    fn resolve(&self) -> Option<CalendarDate> {
        Some(CalendarDate::from_datetime(*self))
    }
}

impl DateLike for &str {
    fn resolve(&self) -> Option<CalendarDate> {
        CalendarDate::parse(self)
    }
}

impl DateLike for String {
    fn resolve(&self) -> Option<CalendarDate> {
        CalendarDate::parse(self)
    }
}

impl DateLike for &String {
    fn resolve(&self) -> Option<CalendarDate> {
        CalendarDate::parse(self)
    }
}

impl<T: DateLike> DateLike for Option<T> {
    fn resolve(&self) -> Option<CalendarDate> {
        self.as_ref().and_then(DateLike::resolve)
    }
}

// ── Comparison predicates ───────────────────────────────────────────
// All three return `false` when either side fails to resolve: a malformed
// date never crashes a sort or filter, it sorts as incomparable.

/// True when `a` falls on an earlier calendar day than `b`.
pub fn before(a: impl DateLike, b: impl DateLike) -> bool {
    match (a.resolve(), b.resolve()) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// True when `a` falls on a later calendar day than `b`.
pub fn after(a: impl DateLike, b: impl DateLike) -> bool {
    match (a.resolve(), b.resolve()) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// True when `a` and `b` name the same calendar day.
pub fn equals(a: impl DateLike, b: impl DateLike) -> bool {
    match (a.resolve(), b.resolve()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// ── Formatting ──────────────────────────────────────────────────────

/// Canonical text for anything date-like; empty string when the input does
/// not resolve. Callers rely on empty-string-means-unset.
pub fn format_date(value: impl DateLike) -> String {
    value.resolve().map(|d| d.format()).unwrap_or_default()
}

/// Same as [`format_date`] with an alternate chrono format.
pub fn format_date_with(value: impl DateLike, format: &str) -> String {
    value
        .resolve()
        .map(|d| d.format_with(format))
        .unwrap_or_default()
}

/// Calendar days from `b` to `a` (positive when `a` is later). `0` when
/// either side fails to resolve.
pub fn days_between(a: impl DateLike, b: impl DateLike) -> i64 {
    match (a.resolve(), b.resolve()) {
        (Some(a), Some(b)) => (a.0 - b.0).num_days(),
        _ => 0,
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────
// Unlike the predicates above, arithmetic on a value that never was a date
// is a contract violation and fails loudly.

/// Shift forward by `days` calendar days (negative shifts backward).
pub fn add_days(value: impl DateLike, days: i64) -> Result<CalendarDate, CoreError> {
    let day = require(value, "add_days")?;
    shift_days(day, days, "add_days")
}

/// Shift backward by `days` calendar days (negative shifts forward).
pub fn sub_days(value: impl DateLike, days: i64) -> Result<CalendarDate, CoreError> {
    let day = require(value, "sub_days")?;
    shift_days(day, days.saturating_neg(), "sub_days")
}

/// Shift by whole months, clamping to the last day of shorter months.
pub fn add_months(value: impl DateLike, months: i32) -> Result<CalendarDate, CoreError> {
    let day = require(value, "add_months")?;
    shift_months(day, i64::from(months), "add_months")
}

/// Shift by whole years.
pub fn add_years(value: impl DateLike, years: i32) -> Result<CalendarDate, CoreError> {
    let day = require(value, "add_years")?;
    shift_months(day, i64::from(years) * 12, "add_years")
}

fn require(value: impl DateLike, operation: &str) -> Result<CalendarDate, CoreError> {
    value.resolve().ok_or_else(|| {
        CoreError::InvalidDate(format!("unusable value provided to {operation}"))
    })
}

fn shift_days(day: CalendarDate, days: i64, operation: &str) -> Result<CalendarDate, CoreError> {
    let shifted = if days >= 0 {
        day.0.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        day.0.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.map(CalendarDate).ok_or_else(|| out_of_range(operation))
}

fn shift_months(day: CalendarDate, months: i64, operation: &str) -> Result<CalendarDate, CoreError> {
    let magnitude =
        u32::try_from(months.unsigned_abs()).map_err(|_| out_of_range(operation))?;
    let shifted = if months >= 0 {
        day.0.checked_add_months(Months::new(magnitude))
    } else {
        day.0.checked_sub_months(Months::new(magnitude))
    };
    shifted.map(CalendarDate).ok_or_else(|| out_of_range(operation))
}

fn out_of_range(operation: &str) -> CoreError {
    CoreError::InvalidDate(format!("result of {operation} is out of range"))
}

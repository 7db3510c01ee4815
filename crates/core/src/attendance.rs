//! Attendance status vocabulary and calendar-date normalization.
//!
//! Attendance is keyed on a calendar date with no time-of-day component.
//! All "today" defaults are pinned to UTC so a record marked near midnight
//! lands on the same day regardless of the server's local timezone.

use std::fmt;

use chrono::{NaiveDate, Utc};

use crate::error::CoreError;

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The two recognized attendance statuses.
///
/// Anything else ("late", "excused", ...) is rejected before it reaches
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Parse a status literal. Strict: no trimming beyond whitespace, no
    /// case folding.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw.trim() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(CoreError::Validation(format!(
                "unknown attendance status '{other}', expected 'present' or 'absent'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!("invalid date '{raw}', expected YYYY-MM-DD"))
    })
}

/// The current calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Resolve an optional caller-supplied date, defaulting to today (UTC).
pub fn resolve_date(raw: Option<&str>) -> Result<NaiveDate, CoreError> {
    match raw {
        Some(s) => parse_date(s),
        None => Ok(today_utc()),
    }
}

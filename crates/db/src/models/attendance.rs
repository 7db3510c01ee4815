//! Attendance models and DTOs.
//!
//! Row structs keep `status` as the raw column text; only validated
//! literals are ever written (see `AttendanceStatus::parse` at the API
//! boundary), so what comes back out is always `present` or `absent`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rollcall_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `attendance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub student_id: DbId,
    pub date: NaiveDate,
    pub status: String,
    pub note: Option<String>,
    /// Overwritten on every upsert for the same (student, date) pair.
    pub marked_at: Timestamp,
}

/// One history entry for a student. Avoids fetching columns the caller
/// already knows (the student id) or does not need (row id, marked_at).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    pub status: String,
    pub note: Option<String>,
}

/// One per-student entry in the class roster for a date, joined with the
/// owning student's name and roll number.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassAttendanceEntry {
    pub student_id: DbId,
    pub name: String,
    pub roll_no: Option<String>,
    pub date: NaiveDate,
    pub status: String,
    pub note: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads and query parameters)
// ---------------------------------------------------------------------------

/// DTO for `POST /api/students/{id}/attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkAttendance {
    /// `YYYY-MM-DD`; defaults to today (UTC) when absent.
    #[serde(default)]
    pub date: Option<String>,
    /// Must be `present` or `absent`. Required, but kept optional so an
    /// absent field reaches handler validation (400) instead of being
    /// rejected by the JSON extractor (422).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Query parameters for `GET /api/students/{id}/attendance`.
///
/// Bounds are inclusive. Ordering of `start` relative to `end` is the
/// caller's responsibility; an inverted range yields an empty result.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Query parameters for `GET /api/attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassParams {
    #[serde(default)]
    pub date: Option<String>,
}

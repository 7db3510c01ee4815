//! Repository for the `attendance` table.
//!
//! The upsert is the one place concurrent writers can race (two callers
//! marking the same student on the same date), so it is a single
//! `INSERT ... ON CONFLICT DO UPDATE` statement rather than a
//! read-then-write sequence. The unique constraint on (student_id, date)
//! resolves the race: last committed write wins, and neither caller
//! observes a duplicate-key failure.

use chrono::NaiveDate;
use sqlx::PgPool;

use rollcall_core::attendance::AttendanceStatus;
use rollcall_core::types::DbId;

use crate::models::attendance::{AttendanceEntry, AttendanceRecord, ClassAttendanceEntry};

/// Column list for `attendance` queries.
const ATTENDANCE_COLUMNS: &str = "id, student_id, date, status, note, marked_at";

/// Provides upsert and query operations for attendance records.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Atomically insert or overwrite the record for (student, date).
    ///
    /// On conflict the status, note, and marked_at are replaced in place;
    /// no history of prior values is retained.
    pub async fn upsert(
        pool: &PgPool,
        student_id: DbId,
        date: NaiveDate,
        status: AttendanceStatus,
        note: Option<&str>,
    ) -> Result<AttendanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (student_id, date, status, note) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (student_id, date) DO UPDATE SET \
                 status = EXCLUDED.status, \
                 note = EXCLUDED.note, \
                 marked_at = now() \
             RETURNING {ATTENDANCE_COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(student_id)
            .bind(date)
            .bind(status.as_str())
            .bind(note)
            .fetch_one(pool)
            .await
    }

    /// Attendance history for a student, most recent date first.
    ///
    /// `start` and `end` are inclusive bounds; either may be absent. An
    /// inverted range simply matches nothing.
    pub async fn history_for_student(
        pool: &PgPool,
        student_id: DbId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceEntry>, sqlx::Error> {
        sqlx::query_as::<_, AttendanceEntry>(
            "SELECT date, status, note FROM attendance \
             WHERE student_id = $1 \
               AND ($2::date IS NULL OR date >= $2) \
               AND ($3::date IS NULL OR date <= $3) \
             ORDER BY date DESC",
        )
        .bind(student_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }

    /// All attendance records for a date, joined with the owning student.
    ///
    /// Students with no record for the date do not appear; no "unmarked"
    /// entries are synthesized.
    pub async fn for_date(
        pool: &PgPool,
        date: NaiveDate,
    ) -> Result<Vec<ClassAttendanceEntry>, sqlx::Error> {
        sqlx::query_as::<_, ClassAttendanceEntry>(
            "SELECT a.student_id, s.name, s.roll_no, a.date, a.status, a.note \
             FROM attendance a \
             JOIN students s ON s.id = a.student_id \
             WHERE a.date = $1",
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }
}

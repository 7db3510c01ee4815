//! Handlers for attendance marking and queries.
//!
//! Validation order in `mark_attendance` matters: status and date are
//! checked before any storage call, and the student lookup happens before
//! the write, so an invalid request never touches the attendance table.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use rollcall_core::attendance::{parse_date, resolve_date, AttendanceStatus};
use rollcall_core::error::CoreError;
use rollcall_core::types::DbId;
use rollcall_db::models::attendance::{
    ClassAttendanceEntry, ClassParams, HistoryParams, MarkAttendance,
};
use rollcall_db::repositories::AttendanceRepo;

use crate::error::AppResult;
use crate::handlers::require_student;
use crate::state::AppState;

/// Response for a successful attendance mark: the normalized date and the
/// accepted status, echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct MarkedAttendance {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Response for the class roster on a date.
#[derive(Debug, Serialize)]
pub struct ClassAttendance {
    pub date: NaiveDate,
    pub attendance: Vec<ClassAttendanceEntry>,
}

/// POST /api/students/{id}/attendance
///
/// Upsert the attendance record for (student, date). Re-marking a day
/// overwrites status and note; at most one record exists per pair.
pub async fn mark_attendance(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(input): Json<MarkAttendance>,
) -> AppResult<impl IntoResponse> {
    let status = input
        .status
        .as_deref()
        .ok_or_else(|| CoreError::Validation("status is required".into()))
        .and_then(AttendanceStatus::parse)?;
    let date = resolve_date(input.date.as_deref())?;

    require_student(&state.pool, student_id).await?;

    let record =
        AttendanceRepo::upsert(&state.pool, student_id, date, status, input.note.as_deref())
            .await?;

    // Best-effort side channel, bumped only after the result exists.
    state.metrics.record(status);

    tracing::info!(student_id, date = %record.date, status = %status, "Attendance recorded");

    Ok(Json(MarkedAttendance {
        date: record.date,
        status,
    }))
}

/// GET /api/students/{id}/attendance?start=&end=
///
/// Attendance history for a student, most recent date first. Bounds are
/// inclusive; an inverted range yields an empty array.
pub async fn attendance_history(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Query(params): Query<HistoryParams>,
) -> AppResult<impl IntoResponse> {
    let start = params.start.as_deref().map(parse_date).transpose()?;
    let end = params.end.as_deref().map(parse_date).transpose()?;

    require_student(&state.pool, student_id).await?;

    let history = AttendanceRepo::history_for_student(&state.pool, student_id, start, end).await?;

    Ok(Json(history))
}

/// GET /api/attendance?date=
///
/// Per-student status entries for a date, joined with student name and
/// roll number. Students with no record for the date are absent from the
/// result.
pub async fn class_attendance(
    State(state): State<AppState>,
    Query(params): Query<ClassParams>,
) -> AppResult<impl IntoResponse> {
    let date = resolve_date(params.date.as_deref())?;

    let attendance = AttendanceRepo::for_date(&state.pool, date).await?;

    Ok(Json(ClassAttendance { date, attendance }))
}

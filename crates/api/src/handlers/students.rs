//! Handlers for the student directory.
//!
//! Thin CRUD: the only business rule is a non-empty name. Deletion
//! cascades to the student's attendance rows via the foreign key.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use rollcall_core::error::CoreError;
use rollcall_core::types::DbId;
use rollcall_db::models::student::{CreateStudent, UpdateStudent};
use rollcall_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_name;
use crate::state::AppState;

/// GET /api/students
///
/// List all students, most recently created first.
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list_all(&state.pool).await?;

    Ok(Json(students))
}

/// POST /api/students
///
/// Create a student. `name` is required and must be non-empty.
pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    let name = require_name(input.name.as_deref())?;

    let student = StudentRepo::create(&state.pool, name, input.roll_no.as_deref()).await?;

    tracing::info!(student_id = student.id, "Student created");

    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/students/{id}
///
/// Replace a student's name and roll number.
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<impl IntoResponse> {
    let name = require_name(input.name.as_deref())?;

    let student = StudentRepo::update(&state.pool, student_id, name, input.roll_no.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }))?;

    tracing::info!(student_id, "Student updated");

    Ok(Json(student))
}

/// DELETE /api/students/{id}
///
/// Delete a student and, by cascade, all of their attendance rows.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = StudentRepo::delete(&state.pool, student_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }));
    }

    tracing::info!(student_id, "Student deleted");

    Ok(Json(json!({ "deleted": true })))
}

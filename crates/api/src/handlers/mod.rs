//! HTTP handlers, one module per resource.

pub mod attendance;
pub mod students;

use sqlx::PgPool;

use rollcall_core::error::CoreError;
use rollcall_core::types::DbId;
use rollcall_db::models::student::Student;
use rollcall_db::repositories::StudentRepo;

use crate::error::AppError;

/// Look up a student or fail with `NotFound`.
///
/// Attendance operations reference students by id; the lookup happens
/// before any attendance write so a bad id never touches the table.
pub(crate) async fn require_student(pool: &PgPool, id: DbId) -> Result<Student, AppError> {
    StudentRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Student", id }))
}

/// Validate a student name: required, non-empty after trimming.
pub(crate) fn require_name(name: Option<&str>) -> Result<&str, AppError> {
    let name = name.ok_or_else(|| {
        AppError::Core(CoreError::Validation("name is required".into()))
    })?;
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }
    Ok(trimmed)
}

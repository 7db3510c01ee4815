//! Repository for the `students` table.

use sqlx::PgPool;

use rollcall_core::types::DbId;

use crate::models::student::Student;

/// Column list for `students` queries.
const STUDENT_COLUMNS: &str = "id, name, roll_no, created_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// List all students, most recently created first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query =
            format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Insert a student and return the created row.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        roll_no: Option<&str>,
    ) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, roll_no) VALUES ($1, $2) RETURNING {STUDENT_COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(name)
            .bind(roll_no)
            .fetch_one(pool)
            .await
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a student's name and roll number.
    ///
    /// Returns `None` if no student with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        roll_no: Option<&str>,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET name = $2, roll_no = $3 WHERE id = $1 \
             RETURNING {STUDENT_COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(name)
            .bind(roll_no)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. The foreign key cascades, deleting all of
    /// the student's attendance rows.
    ///
    /// Returns `true` if a student was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

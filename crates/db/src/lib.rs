//! Persistence layer: pool construction, schema bootstrap, models, and
//! repositories.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Called once at process startup; a connect failure here is fatal to the
/// caller.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `students` and `attendance` tables if they do not exist.
///
/// This is the whole schema story: there is no migration tooling, just
/// idempotent bootstrap at startup. The composite unique constraint is
/// named with the `uq_` prefix per schema conventions.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS students ( \
             id BIGSERIAL PRIMARY KEY, \
             name TEXT NOT NULL, \
             roll_no TEXT, \
             created_at TIMESTAMPTZ NOT NULL DEFAULT now() \
         )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS attendance ( \
             id BIGSERIAL PRIMARY KEY, \
             student_id BIGINT NOT NULL REFERENCES students(id) ON DELETE CASCADE, \
             date DATE NOT NULL, \
             status TEXT NOT NULL, \
             note TEXT, \
             marked_at TIMESTAMPTZ NOT NULL DEFAULT now(), \
             CONSTRAINT uq_attendance_student_date UNIQUE (student_id, date) \
         )",
    )
    .execute(pool)
    .await?;

    tracing::debug!("Schema bootstrap complete");

    Ok(())
}

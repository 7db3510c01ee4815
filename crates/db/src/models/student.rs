//! Student models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rollcall_core::types::{DbId, Timestamp};

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub roll_no: Option<String>,
    /// Server-assigned at creation, immutable thereafter.
    pub created_at: Timestamp,
}

/// DTO for `POST /api/students`.
///
/// `name` is required but kept optional here so an absent field reaches
/// the handler's validation (400) instead of being rejected by the JSON
/// extractor (422).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roll_no: Option<String>,
}

/// DTO for `PUT /api/students/{id}`. Full replacement of name and roll_no.
/// `name` is required, validated in the handler like [`CreateStudent`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roll_no: Option<String>,
}

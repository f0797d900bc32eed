//! Work experience model and DTOs.

use folio_core::normalize::nullable;
use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `experience` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub company: String,
    pub position: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new experience entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperience {
    pub company: String,
    pub position: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating an experience entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub display_order: Option<i32>,
}

//! Education entry model and DTOs.

use folio_core::normalize::nullable;
use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `education` table. `end_date = None` means "ongoing".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Education {
    pub id: DbId,
    pub institution: String,
    pub degree_or_course: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub description: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new education entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEducation {
    pub institution: String,
    pub degree_or_course: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub description: Option<String>,
    pub certificate_url: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating an education entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEducation {
    pub institution: Option<String>,
    pub degree_or_course: Option<String>,
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub certificate_url: Option<Option<String>>,
    pub display_order: Option<i32>,
}

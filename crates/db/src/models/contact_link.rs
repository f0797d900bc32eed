//! Contact link (social profile) model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactLink {
    pub id: DbId,
    pub platform: String,
    pub url: String,
    /// Free-form icon name, mapped to a known icon at render time.
    pub icon_name: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new contact link.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactLink {
    pub platform: String,
    pub url: String,
    /// Defaults to `mail` if omitted.
    pub icon_name: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating a contact link. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContactLink {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon_name: Option<String>,
    pub display_order: Option<i32>,
}

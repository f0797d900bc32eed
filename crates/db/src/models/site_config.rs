//! Site-wide profile configuration (singleton row).

use folio_core::normalize::nullable;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `site_config` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteConfig {
    pub id: DbId,
    /// Job title shown in the hero section.
    pub role: String,
    pub headline: String,
    pub about_me_content: String,
    pub avatar_url: Option<String>,
    pub cv_url: Option<String>,
    pub hero_bg_url: Option<String>,
    pub updated_at: Timestamp,
}

/// DTO for updating the site configuration. All fields are optional.
///
/// The text columns are NOT NULL, so clearing one (`null`, or `""` after
/// body cleanup) stores an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSiteConfig {
    #[serde(default, deserialize_with = "nullable")]
    pub role: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub headline: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub about_me_content: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub avatar_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub cv_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub hero_bg_url: Option<Option<String>>,
}

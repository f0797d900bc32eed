//! Repository for the singleton `site_config` table.

use sqlx::PgPool;

use crate::models::site_config::{SiteConfig, UpdateSiteConfig};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, role, headline, about_me_content, avatar_url, cv_url, hero_bg_url, updated_at";

/// Reads and updates the site configuration row.
pub struct SiteConfigRepo;

impl SiteConfigRepo {
    /// Fetch the configuration row. The migration seeds it, so a missing
    /// row surfaces as `RowNotFound`.
    pub async fn get(pool: &PgPool) -> Result<SiteConfig, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_config WHERE id = 1");
        sqlx::query_as::<_, SiteConfig>(&query)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update and return the new row.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteConfig,
    ) -> Result<SiteConfig, sqlx::Error> {
        let query = format!(
            "UPDATE site_config SET
                role = COALESCE($1, role),
                headline = COALESCE($2, headline),
                about_me_content = COALESCE($3, about_me_content),
                avatar_url = CASE WHEN $4 THEN $5 ELSE avatar_url END,
                cv_url = CASE WHEN $6 THEN $7 ELSE cv_url END,
                hero_bg_url = CASE WHEN $8 THEN $9 ELSE hero_bg_url END
             WHERE id = 1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteConfig>(&query)
            .bind(text_or_empty(&input.role))
            .bind(text_or_empty(&input.headline))
            .bind(text_or_empty(&input.about_me_content))
            .bind(input.avatar_url.is_some())
            .bind(input.avatar_url.clone().flatten())
            .bind(input.cv_url.is_some())
            .bind(input.cv_url.clone().flatten())
            .bind(input.hero_bg_url.is_some())
            .bind(input.hero_bg_url.clone().flatten())
            .fetch_one(pool)
            .await
    }
}

/// `None` leaves the column alone; a cleared value becomes `''`.
fn text_or_empty(field: &Option<Option<String>>) -> Option<String> {
    field.as_ref().map(|value| value.clone().unwrap_or_default())
}

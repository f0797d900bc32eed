//! Repository for the `contact_links` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_link::{ContactLink, CreateContactLink, UpdateContactLink};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, platform, url, icon_name, display_order, created_at, updated_at";

/// Provides CRUD operations for contact links.
pub struct ContactLinkRepo;

impl ContactLinkRepo {
    /// Insert a new link, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactLink,
    ) -> Result<ContactLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_links (platform, url, icon_name, display_order)
             VALUES ($1, $2, COALESCE($3, 'mail'), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactLink>(&query)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon_name)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a link by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContactLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_links WHERE id = $1");
        sqlx::query_as::<_, ContactLink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all links in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_links ORDER BY display_order, id");
        sqlx::query_as::<_, ContactLink>(&query).fetch_all(pool).await
    }

    /// Update a link. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContactLink,
    ) -> Result<Option<ContactLink>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_links SET
                platform = COALESCE($2, platform),
                url = COALESCE($3, url),
                icon_name = COALESCE($4, icon_name),
                display_order = COALESCE($5, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactLink>(&query)
            .bind(id)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon_name)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a link by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `experience` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::experience::{CreateExperience, Experience, UpdateExperience};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company, position, start_date, end_date, description, \
                       display_order, created_at, updated_at";

/// Provides CRUD operations for experience entries.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experience
                (company, position, start_date, end_date, description, display_order)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.company)
            .bind(&input.position)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experience WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries in display order (public page).
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experience ORDER BY display_order, id");
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// List all entries, most recent start date first (admin listing).
    pub async fn list_by_start_date(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM experience ORDER BY start_date DESC, id DESC");
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experience SET
                company = COALESCE($2, company),
                position = COALESCE($3, position),
                start_date = COALESCE($4, start_date),
                end_date = CASE WHEN $5 THEN $6 ELSE end_date END,
                description = CASE WHEN $7 THEN $8 ELSE description END,
                display_order = COALESCE($9, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(&input.company)
            .bind(&input.position)
            .bind(input.start_date)
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experience WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `education` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::education::{CreateEducation, Education, UpdateEducation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, institution, degree_or_course, start_date, end_date, description, \
                       certificate_url, display_order, created_at, updated_at";

/// Provides CRUD operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEducation) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO education
                (institution, degree_or_course, start_date, end_date, description,
                 certificate_url, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.institution)
            .bind(&input.degree_or_course)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(&input.certificate_url)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education WHERE id = $1");
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries in display order (public page).
    pub async fn list(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education ORDER BY display_order, id");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// List all entries, most recent start date first (admin listing).
    pub async fn list_by_start_date(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education ORDER BY start_date DESC, id DESC");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE education SET
                institution = COALESCE($2, institution),
                degree_or_course = COALESCE($3, degree_or_course),
                start_date = COALESCE($4, start_date),
                end_date = CASE WHEN $5 THEN $6 ELSE end_date END,
                description = CASE WHEN $7 THEN $8 ELSE description END,
                certificate_url = CASE WHEN $9 THEN $10 ELSE certificate_url END,
                display_order = COALESCE($11, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(&input.institution)
            .bind(&input.degree_or_course)
            .bind(input.start_date)
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.certificate_url.is_some())
            .bind(input.certificate_url.clone().flatten())
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM education WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `project_images` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{NewProjectImage, ProjectImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, image_url, is_main, display_order";

/// Provides read and bulk-write operations for project images.
pub struct ProjectImageRepo;

impl ProjectImageRepo {
    /// List every image in display order (the caller groups by project).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_images ORDER BY display_order, id");
        sqlx::query_as::<_, ProjectImage>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the images of one project in display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_images
             WHERE project_id = $1
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Insert `images` for a project in one statement. Each image's
    /// `display_order` is its index in the slice.
    pub async fn insert_many(
        pool: &PgPool,
        project_id: DbId,
        images: &[NewProjectImage],
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        if images.is_empty() {
            return Ok(Vec::new());
        }
        let (urls, mains, orders) = columns(images);
        sqlx::query_as::<_, ProjectImage>(&insert_query())
            .bind(project_id)
            .bind(urls)
            .bind(mains)
            .bind(orders)
            .fetch_all(pool)
            .await
    }

    /// Replace all images of a project: delete the old rows and insert the
    /// new ones inside a single transaction on this table.
    pub async fn replace_for_project(
        pool: &PgPool,
        project_id: DbId,
        images: &[NewProjectImage],
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM project_images WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        let inserted = if images.is_empty() {
            Vec::new()
        } else {
            let (urls, mains, orders) = columns(images);
            sqlx::query_as::<_, ProjectImage>(&insert_query())
                .bind(project_id)
                .bind(urls)
                .bind(mains)
                .bind(orders)
                .fetch_all(&mut *tx)
                .await?
        };

        tx.commit().await?;
        Ok(inserted)
    }
}

fn insert_query() -> String {
    format!(
        "INSERT INTO project_images (project_id, image_url, is_main, display_order)
         SELECT $1, t.image_url, t.is_main, t.display_order
         FROM UNNEST($2::text[], $3::bool[], $4::int4[]) AS t(image_url, is_main, display_order)
         RETURNING {COLUMNS}"
    )
}

/// Split images into the parallel arrays bound to `UNNEST`.
fn columns(images: &[NewProjectImage]) -> (Vec<String>, Vec<bool>, Vec<i32>) {
    let urls = images.iter().map(|img| img.url.clone()).collect();
    let mains = images.iter().map(|img| img.is_main).collect();
    let orders = (0..images.len() as i32).collect();
    (urls, mains, orders)
}

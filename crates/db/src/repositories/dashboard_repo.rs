//! Aggregate queries for the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardSummary;

/// Read-only counts across the content tables.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Count every content type in one round trip.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(*) FROM projects)         AS projects,
                (SELECT COUNT(*) FROM education)        AS education,
                (SELECT COUNT(*) FROM experience)       AS experience,
                (SELECT COUNT(*) FROM contact_links)    AS contact_links,
                (SELECT COUNT(*) FROM contact_messages) AS messages,
                (SELECT COUNT(*) FROM contact_messages WHERE read = false) AS unread_messages",
        )
        .fetch_one(pool)
        .await
    }
}

//! Aggregate counts for the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

/// Number of records per content type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    pub projects: i64,
    pub education: i64,
    pub experience: i64,
    pub contact_links: i64,
    pub messages: i64,
    pub unread_messages: i64,
}

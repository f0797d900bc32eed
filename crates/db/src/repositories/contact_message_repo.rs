//! Repository for the `contact_messages` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_message::{ContactMessage, CreateContactMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, message, read, created_at";

/// Stores and manages contact form messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Store a new message. Messages always start unread.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, message, read)
             VALUES ($1, $2, $3, false)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a message by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages WHERE id = $1");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all messages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Mark a message read or unread. Returns `None` if it does not exist.
    pub async fn set_read(
        pool: &PgPool,
        id: DbId,
        read: bool,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query =
            format!("UPDATE contact_messages SET read = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .bind(read)
            .fetch_optional(pool)
            .await
    }

    /// Number of messages not yet marked read.
    pub async fn count_unread(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE read = false")
            .fetch_one(pool)
            .await
    }

    /// Delete a message by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

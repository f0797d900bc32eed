//! Messages left through the public contact form.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: Timestamp,
}

/// DTO for storing a new (unread) message.
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<folio_core::contact::ContactSubmission> for CreateContactMessage {
    fn from(s: folio_core::contact::ContactSubmission) -> Self {
        Self {
            name: s.name,
            email: s.email,
            message: s.message,
        }
    }
}

/// Body of `PATCH /messages/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMessageRead {
    pub read: bool,
}

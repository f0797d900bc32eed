//! Public contact form endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::contact::ContactSubmission;
use folio_db::models::contact_message::CreateContactMessage;
use folio_db::repositories::ContactMessageRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Acknowledgement returned to the visitor. The stored row is not echoed.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub success: bool,
}

/// POST /api/v1/contact
///
/// Stores the message unread. No authentication.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactSubmission>,
) -> AppResult<(StatusCode, Json<ContactReceipt>)> {
    let submission = input.into_validated()?;
    let message =
        ContactMessageRepo::create(&state.pool, &CreateContactMessage::from(submission)).await?;
    tracing::info!(message_id = message.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(ContactReceipt { success: true })))
}

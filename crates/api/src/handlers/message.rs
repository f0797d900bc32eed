//! Owner inbox: handlers for the `/messages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::contact_message::{ContactMessage, UpdateMessageRead};
use folio_db::repositories::ContactMessageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// GET /api/v1/messages
pub async fn list(
    State(state): State<AppState>,
    _owner: OwnerSession,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// GET /api/v1/messages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("ContactMessage", id))?;
    Ok(Json(message))
}

/// PATCH /api/v1/messages/{id}
pub async fn set_read(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMessageRead>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::set_read(&state.pool, id, input.read)
        .await?
        .ok_or(AppError::not_found("ContactMessage", id))?;
    Ok(Json(message))
}

/// DELETE /api/v1/messages/{id}
pub async fn delete(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ContactMessageRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ContactMessage", id))
    }
}

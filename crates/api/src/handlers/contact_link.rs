//! Handlers for the `/contact-links` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::contact_link::{ContactLink, CreateContactLink, UpdateContactLink};
use folio_db::repositories::ContactLinkRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// GET /api/v1/contact-links
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ContactLink>>> {
    let links = ContactLinkRepo::list(&state.pool).await?;
    Ok(Json(links))
}

/// GET /api/v1/contact-links/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactLink>> {
    let link = ContactLinkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("ContactLink", id))?;
    Ok(Json(link))
}

/// POST /api/v1/contact-links
pub async fn create(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Json(input): Json<CreateContactLink>,
) -> AppResult<(StatusCode, Json<ContactLink>)> {
    let link = ContactLinkRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// PUT /api/v1/contact-links/{id}
pub async fn update(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactLink>,
) -> AppResult<Json<ContactLink>> {
    let link = ContactLinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("ContactLink", id))?;
    Ok(Json(link))
}

/// DELETE /api/v1/contact-links/{id}
pub async fn delete(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ContactLinkRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ContactLink", id))
    }
}

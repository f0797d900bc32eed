//! Handlers for the `/education` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::education::{CreateEducation, Education, UpdateEducation};
use folio_db::repositories::EducationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::CleanJson;
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// GET /api/v1/education
///
/// Newest start date first. The public page orders by `display_order` instead.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Education>>> {
    let entries = EducationRepo::list_by_start_date(&state.pool).await?;
    Ok(Json(entries))
}

/// GET /api/v1/education/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Education>> {
    let entry = EducationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Education", id))?;
    Ok(Json(entry))
}

/// POST /api/v1/education
pub async fn create(
    State(state): State<AppState>,
    _owner: OwnerSession,
    CleanJson(input): CleanJson<CreateEducation>,
) -> AppResult<(StatusCode, Json<Education>)> {
    let entry = EducationRepo::create(&state.pool, &input).await?;
    tracing::info!(education_id = entry.id, "Education entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/v1/education/{id}
pub async fn update(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
    CleanJson(input): CleanJson<UpdateEducation>,
) -> AppResult<Json<Education>> {
    let entry = EducationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Education", id))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/education/{id}
pub async fn delete(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EducationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Education", id))
    }
}

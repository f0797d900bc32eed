//! Handlers for the `/experience` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::experience::{CreateExperience, Experience, UpdateExperience};
use folio_db::repositories::ExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::CleanJson;
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// GET /api/v1/experience
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Experience>>> {
    let entries = ExperienceRepo::list_by_start_date(&state.pool).await?;
    Ok(Json(entries))
}

/// GET /api/v1/experience/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Experience>> {
    let entry = ExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Experience", id))?;
    Ok(Json(entry))
}

/// POST /api/v1/experience
pub async fn create(
    State(state): State<AppState>,
    _owner: OwnerSession,
    CleanJson(input): CleanJson<CreateExperience>,
) -> AppResult<(StatusCode, Json<Experience>)> {
    let entry = ExperienceRepo::create(&state.pool, &input).await?;
    tracing::info!(experience_id = entry.id, "Experience entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/v1/experience/{id}
pub async fn update(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
    CleanJson(input): CleanJson<UpdateExperience>,
) -> AppResult<Json<Experience>> {
    let entry = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Experience", id))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/experience/{id}
pub async fn delete(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ExperienceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Experience", id))
    }
}

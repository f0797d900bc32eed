//! Handlers for the `/projects` resource.
//!
//! A project is written together with its image list. The two writes are
//! independent: when the project row is saved but the image write fails, the
//! failure is logged and the saved project is still returned.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::project::{
    CreateProject, NewProjectImage, ProjectImage, ProjectWithImages, UpdateProject,
};
use folio_db::repositories::{ProjectImageRepo, ProjectRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::CleanJson;
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// Body of `POST /projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(alias = "projectData")]
    pub project: CreateProject,
    #[serde(default)]
    pub images: Vec<NewProjectImage>,
}

/// Body of `PUT /projects/{id}`. An empty or missing `images` list keeps the
/// current images.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default, alias = "projectData")]
    pub project: UpdateProject,
    #[serde(default)]
    pub images: Vec<NewProjectImage>,
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithImages>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let images = ProjectImageRepo::list_all(&state.pool).await?;
    Ok(Json(ProjectWithImages::attach(projects, images)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithImages>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    let images = ProjectImageRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(ProjectWithImages { project, images }))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    _owner: OwnerSession,
    CleanJson(input): CleanJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectWithImages>)> {
    let project = ProjectRepo::create(&state.pool, &input.project).await?;
    tracing::info!(project_id = project.id, images = input.images.len(), "Project created");

    let images = match ProjectImageRepo::insert_many(&state.pool, project.id, &input.images).await
    {
        Ok(images) => images,
        Err(e) => {
            tracing::error!(project_id = project.id, error = %e, "Failed to store project images");
            Vec::new()
        }
    };

    Ok((StatusCode::CREATED, Json(ProjectWithImages { project, images })))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
    CleanJson(input): CleanJson<UpdateProjectRequest>,
) -> AppResult<Json<ProjectWithImages>> {
    let project = ProjectRepo::update(&state.pool, id, &input.project)
        .await?
        .ok_or(AppError::not_found("Project", id))?;

    let images = if input.images.is_empty() {
        ProjectImageRepo::list_by_project(&state.pool, id).await?
    } else {
        replace_images(&state, id, &input.images).await?
    };

    Ok(Json(ProjectWithImages { project, images }))
}

/// DELETE /api/v1/projects/{id}
///
/// Images are removed by the `ON DELETE CASCADE` foreign key.
pub async fn delete(
    State(state): State<AppState>,
    _owner: OwnerSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", id))
    }
}

/// Replace a project's images, falling back to the stored list on failure.
async fn replace_images(
    state: &AppState,
    project_id: DbId,
    images: &[NewProjectImage],
) -> AppResult<Vec<ProjectImage>> {
    match ProjectImageRepo::replace_for_project(&state.pool, project_id, images).await {
        Ok(stored) => Ok(stored),
        Err(e) => {
            tracing::error!(project_id, error = %e, "Failed to replace project images");
            Ok(ProjectImageRepo::list_by_project(&state.pool, project_id).await?)
        }
    }
}

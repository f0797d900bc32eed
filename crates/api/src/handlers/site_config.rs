//! Handlers for the `/site-config` singleton.

use axum::extract::State;
use axum::Json;
use folio_db::models::site_config::{SiteConfig, UpdateSiteConfig};
use folio_db::repositories::SiteConfigRepo;

use crate::error::AppResult;
use crate::extract::CleanJson;
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// GET /api/v1/site-config
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SiteConfig>> {
    let config = SiteConfigRepo::get(&state.pool).await?;
    Ok(Json(config))
}

/// PUT /api/v1/site-config
pub async fn update(
    State(state): State<AppState>,
    _owner: OwnerSession,
    CleanJson(input): CleanJson<UpdateSiteConfig>,
) -> AppResult<Json<SiteConfig>> {
    let config = SiteConfigRepo::update(&state.pool, &input).await?;
    tracing::info!("Site configuration updated");
    Ok(Json(config))
}

//! Handler for the owner dashboard summary.

use axum::extract::State;
use axum::Json;
use folio_db::models::dashboard::DashboardSummary;
use folio_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// GET /api/v1/admin/summary
pub async fn summary(
    State(state): State<AppState>,
    _owner: OwnerSession,
) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(summary))
}

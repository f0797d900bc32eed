use axum::routing::get;
use axum::Router;

use crate::handlers::site_config;
use crate::state::AppState;

/// Routes mounted at `/site-config`.
///
/// ```text
/// GET  /  -> get
/// PUT  /  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(site_config::get).put(site_config::update))
}

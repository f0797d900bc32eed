use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Public pages, mounted at the root.
///
/// ```text
/// GET /             -> home (HTML)
/// GET /robots.txt   -> robots
/// GET /sitemap.xml  -> sitemap
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::home))
        .route("/robots.txt", get(site::robots))
        .route("/sitemap.xml", get(site::sitemap))
}

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /  -> upload (multipart, requires auth)
/// ```
///
/// The body limit replaces axum's 2 MiB default for this route only.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

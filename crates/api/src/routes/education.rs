//! Route definitions for the `/education` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::education;
use crate::state::AppState;

/// Routes mounted at `/education`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(education::list).post(education::create))
        .route(
            "/{id}",
            get(education::get_by_id)
                .put(education::update)
                .delete(education::delete),
        )
}

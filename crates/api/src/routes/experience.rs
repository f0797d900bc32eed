//! Route definitions for the `/experience` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::experience;
use crate::state::AppState;

/// Routes mounted at `/experience`.
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
        .route("/", get(experience::list).post(experience::create))
        .route(
            "/{id}",
            get(experience::get_by_id)
                .put(experience::update)
                .delete(experience::delete),
        )
}

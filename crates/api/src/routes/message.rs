//! Route definitions for the owner inbox.

use axum::routing::get;
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/messages`. All require auth.
///
/// ```text
/// GET    /      -> list
/// GET    /{id}  -> get_by_id
/// PATCH  /{id}  -> set_read
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(message::list)).route(
        "/{id}",
        get(message::get_by_id)
            .patch(message::set_read)
            .delete(message::delete),
    )
}

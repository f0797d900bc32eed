//! Route definitions for the `/contact-links` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact_link;
use crate::state::AppState;

/// Routes mounted at `/contact-links`.
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
        .route("/", get(contact_link::list).post(contact_link::create))
        .route(
            "/{id}",
            get(contact_link::get_by_id)
                .put(contact_link::update)
                .delete(contact_link::delete),
        )
}

pub mod admin;
pub mod auth;
pub mod contact_link;
pub mod education;
pub mod experience;
pub mod health;
pub mod message;
pub mod project;
pub mod site;
pub mod site_config;
pub mod upload;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /site-config                     get (public), update
/// /projects                        list (public), create
/// /projects/{id}                   get (public), update, delete
/// /education                       list (public), create
/// /education/{id}                  get (public), update, delete
/// /experience                      list (public), create
/// /experience/{id}                 get (public), update, delete
/// /contact-links                   list (public), create
/// /contact-links/{id}              get (public), update, delete
///
/// /contact                         submit a message (public)
/// /messages                        list
/// /messages/{id}                   get, mark read/unread, delete
///
/// /uploads                         multipart upload -> { url }
/// /admin/summary                   dashboard counts
/// ```
///
/// Every route not marked public requires the owner's bearer token.
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/site-config", site_config::router())
        .nest("/projects", project::router())
        .nest("/education", education::router())
        .nest("/experience", experience::router())
        .nest("/contact-links", contact_link::router())
        .route("/contact", post(handlers::contact::submit))
        .nest("/messages", message::router())
        .nest("/uploads", upload::router(max_upload_bytes))
        .nest("/admin", admin::router())
}

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ObjectStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration (JWT settings, site settings, upload limit).
    pub config: Arc<ServerConfig>,
    /// Destination of uploaded files.
    pub store: Arc<dyn ObjectStore>,
}

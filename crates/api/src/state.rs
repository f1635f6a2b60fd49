use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskbridge_db::DbPool,
    /// Server configuration (read by auth extractors and handlers).
    pub config: Arc<ServerConfig>,
}

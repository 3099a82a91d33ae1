use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state, available to every handler via
/// `State<AppState>`.
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pagepulse_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

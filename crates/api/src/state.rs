use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is internally reference-counted. This is
/// the only shared mutable state in the process -- handlers receive it
/// explicitly instead of reaching for a global connection.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gcrental_db::DbPool,
    /// Server configuration (JWT settings, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}

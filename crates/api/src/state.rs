use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: klima_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Shared monitoring state + reading-loop lifecycle.
    pub monitor: Arc<klima_monitor::Monitor>,
    /// Dual-sink persistence for measurements and parameter changes.
    pub recorder: klima_monitor::Recorder,
}

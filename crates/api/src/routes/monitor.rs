//! Route definitions for connection and monitoring control.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::monitor;
use crate::state::AppState;

/// Control routes mounted at the `/api/v1` root.
///
/// ```text
/// POST /connection/open    -> open_connection
/// POST /connection/close   -> close_connection
/// POST /monitoring/start   -> start_monitoring
/// POST /monitoring/stop    -> stop_monitoring
/// GET  /status             -> get_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/connection/open", post(monitor::open_connection))
        .route("/connection/close", post(monitor::close_connection))
        .route("/monitoring/start", post(monitor::start_monitoring))
        .route("/monitoring/stop", post(monitor::stop_monitoring))
        .route("/status", get(monitor::get_status))
}

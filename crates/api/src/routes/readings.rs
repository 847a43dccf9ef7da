//! Route definitions for reading queries.

use axum::routing::get;
use axum::Router;

use crate::handlers::readings;
use crate::state::AppState;

/// Reading routes mounted at `/readings`.
///
/// ```text
/// GET /live       -> get_live
/// GET /latest     -> get_latest
/// GET /history    -> get_history
/// GET /log        -> get_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/live", get(readings::get_live))
        .route("/latest", get(readings::get_latest))
        .route("/history", get(readings::get_history))
        .route("/log", get(readings::get_log))
}

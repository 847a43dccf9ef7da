//! Route definitions for parameter reads and updates.

use axum::routing::get;
use axum::Router;

use crate::handlers::parameters;
use crate::state::AppState;

/// Parameter routes mounted at `/parameters`.
///
/// ```text
/// GET /           -> get_current
/// PUT /           -> set_parameters
/// GET /history    -> get_history
/// GET /log        -> get_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(parameters::get_current).put(parameters::set_parameters),
        )
        .route("/history", get(parameters::get_history))
        .route("/log", get(parameters::get_log))
}

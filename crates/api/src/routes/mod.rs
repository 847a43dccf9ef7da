pub mod health;
pub mod monitor;
pub mod parameters;
pub mod readings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /connection/open        POST  open the serial port, start the reading loop
/// /connection/close       POST  stop the loop, clear state, release the port
/// /monitoring/start       POST  enable monitoring
/// /monitoring/stop        POST  disable monitoring
/// /status                 GET   connection/monitoring flags + parameters
///
/// /readings/live          GET   in-memory history
/// /readings/latest        GET   most recent pair
/// /readings/history       GET   last 100 database rows
/// /readings/log           GET   last 100 CSV rows
///
/// /parameters             GET current, PUT set
/// /parameters/history     GET   last 50 database rows
/// /parameters/log         GET   last 50 CSV rows
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(monitor::router())
        .nest("/readings", readings::router())
        .nest("/parameters", parameters::router())
}

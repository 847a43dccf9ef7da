//! Handlers for connection and monitoring control.
//!
//! Control actions are success-shaped: they return the post-action status
//! snapshot with 200 even when the underlying action failed (an open failure
//! shows up as `connected: false`). Callers poll `GET /status`.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use klima_monitor::state::MonitorStatus;

use crate::response::DataResponse;
use crate::state::AppState;

/// POST /connection/open
///
/// Open the serial port and start the reading loop. A second open while a
/// connection is active is ignored.
pub async fn open_connection(State(state): State<AppState>) -> Json<DataResponse<MonitorStatus>> {
    let serial = state.config.serial_config();
    Arc::clone(&state.monitor)
        .open_serial(&serial, state.recorder.clone())
        .await;
    status_response(&state).await
}

/// POST /connection/close
///
/// Cancel the reading loop, clear history and parameters, release the port.
pub async fn close_connection(State(state): State<AppState>) -> Json<DataResponse<MonitorStatus>> {
    state.monitor.close().await;
    status_response(&state).await
}

/// POST /monitoring/start
pub async fn start_monitoring(State(state): State<AppState>) -> Json<DataResponse<MonitorStatus>> {
    state.monitor.start_monitoring().await;
    status_response(&state).await
}

/// POST /monitoring/stop
pub async fn stop_monitoring(State(state): State<AppState>) -> Json<DataResponse<MonitorStatus>> {
    state.monitor.stop_monitoring().await;
    status_response(&state).await
}

/// GET /status
pub async fn get_status(State(state): State<AppState>) -> Json<DataResponse<MonitorStatus>> {
    status_response(&state).await
}

async fn status_response(state: &AppState) -> Json<DataResponse<MonitorStatus>> {
    Json(DataResponse {
        data: state.monitor.status().await,
    })
}

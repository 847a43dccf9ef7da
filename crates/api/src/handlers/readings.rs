//! Handlers for live and historical reading queries.

use axum::extract::State;
use axum::Json;
use klima_core::measurement::Measurement;
use klima_db::models::measurement::MeasurementRow;
use klima_db::repositories::MeasurementRepo;
use klima_monitor::logfile::LoggedMeasurement;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum rows returned by the durable measurement history endpoints.
const HISTORY_LIMIT: i64 = 100;

/// GET /readings/live
///
/// Full in-memory history, oldest first.
pub async fn get_live(State(state): State<AppState>) -> Json<DataResponse<Vec<Measurement>>> {
    Json(DataResponse {
        data: state.monitor.live_history().await,
    })
}

/// GET /readings/latest
///
/// Most recent pair; `data: null` when nothing has been recorded yet.
pub async fn get_latest(
    State(state): State<AppState>,
) -> Json<DataResponse<Option<Measurement>>> {
    Json(DataResponse {
        data: state.monitor.latest().await,
    })
}

/// GET /readings/history
///
/// Last 100 database rows, newest first.
pub async fn get_history(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MeasurementRow>>>> {
    let rows = MeasurementRepo::recent(&state.pool, HISTORY_LIMIT).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /readings/log
///
/// Last 100 CSV rows, oldest first. A missing log file yields an empty list.
pub async fn get_log(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LoggedMeasurement>>>> {
    let rows = state
        .recorder
        .measurement_log()
        .tail_measurements(HISTORY_LIMIT as usize)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read measurement log: {e}")))?;
    Ok(Json(DataResponse { data: rows }))
}

//! Handlers for parameter reads and updates.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use klima_core::error::CoreError;
use klima_core::measurement::{Parameters, DEFAULT_INTERVAL_SECS};
use klima_db::models::parameter::ParameterRow;
use klima_db::repositories::ParameterRepo;
use klima_monitor::logfile::LoggedParameters;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum rows returned by the parameter history endpoints.
const PARAMETER_HISTORY_LIMIT: i64 = 50;

/// Request body for `PUT /parameters`.
///
/// An absent threshold disables alerting; an absent interval falls back to
/// the 1-second default.
#[derive(Debug, Deserialize)]
pub struct SetParametersRequest {
    pub threshold: Option<f64>,
    pub interval_secs: Option<f64>,
}

/// GET /parameters
///
/// The currently applied parameters.
pub async fn get_current(State(state): State<AppState>) -> Json<DataResponse<Parameters>> {
    Json(DataResponse {
        data: state.monitor.parameters().await,
    })
}

/// PUT /parameters
///
/// Replace the parameters wholesale and append the change to both durable
/// stores. Durable-write failures are logged, not surfaced; the new
/// parameters apply regardless.
pub async fn set_parameters(
    State(state): State<AppState>,
    Json(input): Json<SetParametersRequest>,
) -> AppResult<Json<DataResponse<Parameters>>> {
    let interval_secs = input.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS);
    if !interval_secs.is_finite() || interval_secs < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "interval_secs must be a non-negative number".to_string(),
        )));
    }

    let params = Parameters {
        threshold: input.threshold,
        interval_secs,
    };

    state.monitor.set_parameters(params.clone()).await;
    state
        .recorder
        .record_parameters(Utc::now(), &params)
        .await
        .log_failures("parameters");

    Ok(Json(DataResponse { data: params }))
}

/// GET /parameters/history
///
/// Last 50 database rows, newest first.
pub async fn get_history(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ParameterRow>>>> {
    let rows = ParameterRepo::recent(&state.pool, PARAMETER_HISTORY_LIMIT).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /parameters/log
///
/// Last 50 CSV rows, oldest first.
pub async fn get_log(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LoggedParameters>>>> {
    let rows = state
        .recorder
        .parameter_log()
        .tail_parameters(PARAMETER_HISTORY_LIMIT as usize)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read parameter log: {e}")))?;
    Ok(Json(DataResponse { data: rows }))
}

//! Integration tests for the connection and monitoring control surface.
//!
//! The test config points the serial device at a nonexistent path, so open
//! attempts fail exactly the way an unplugged sensor would.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post, put_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: status starts closed and idle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn status_defaults_to_closed_and_idle(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, &dir);

    let response = get(app, "/api/v1/status").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["connected"], false);
    assert_eq!(json["data"]["monitoring"], false);
    assert_eq!(json["data"]["parameters"]["threshold"], serde_json::Value::Null);
    assert_eq!(json["data"]["parameters"]["interval_secs"], 1.0);
}

// ---------------------------------------------------------------------------
// Test: open failure is success-shaped
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn open_with_unavailable_device_returns_200_and_stays_closed(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, &dir);

    let response = post(app.clone(), "/api/v1/connection/open").await;
    assert_eq!(response.status(), StatusCode::OK);

    // The failure is only visible as state, never as an error response.
    let json = body_json(response).await;
    assert_eq!(json["data"]["connected"], false);

    let status = body_json(get(app, "/api/v1/status").await).await;
    assert_eq!(status["data"]["connected"], false);
}

// ---------------------------------------------------------------------------
// Test: monitoring flag flips via start/stop
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn start_and_stop_monitoring_flip_the_flag(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, &dir);

    let started = body_json(post(app.clone(), "/api/v1/monitoring/start").await).await;
    assert_eq!(started["data"]["monitoring"], true);

    let stopped = body_json(post(app.clone(), "/api/v1/monitoring/stop").await).await;
    assert_eq!(stopped["data"]["monitoring"], false);
}

// ---------------------------------------------------------------------------
// Test: close resets parameters, history, and flags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn close_clears_parameters_history_and_flags(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, &dir);

    put_json(
        app.clone(),
        "/api/v1/parameters",
        json!({ "threshold": 25.0, "interval_secs": 0.5 }),
    )
    .await;
    post(app.clone(), "/api/v1/monitoring/start").await;

    let response = post(app.clone(), "/api/v1/connection/close").await;
    assert_eq!(response.status(), StatusCode::OK);

    let status = body_json(get(app.clone(), "/api/v1/status").await).await;
    assert_eq!(status["data"]["connected"], false);
    assert_eq!(status["data"]["monitoring"], false);
    assert_eq!(status["data"]["parameters"]["threshold"], serde_json::Value::Null);
    assert_eq!(status["data"]["parameters"]["interval_secs"], 1.0);

    let live = body_json(get(app, "/api/v1/readings/live").await).await;
    assert_eq!(live["data"], json!([]));
}

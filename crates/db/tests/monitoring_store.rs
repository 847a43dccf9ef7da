//! Integration tests for the measurement and parameter repositories.

use chrono::{TimeZone, Utc};
use klima_core::measurement::{Measurement, Parameters};
use klima_core::types::Timestamp;
use klima_db::repositories::{MeasurementRepo, ParameterRepo};
use sqlx::SqlitePool;

fn at(hour: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2026, 8, 7, hour, 0, 0).unwrap()
}

fn measurement(hour: u32, temperature: f64, humidity: f64) -> Measurement {
    Measurement {
        timestamp: at(hour),
        temperature,
        humidity,
    }
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn insert_measurement_returns_persisted_row(pool: SqlitePool) {
    let row = MeasurementRepo::insert(&pool, &measurement(12, 23.5, 40.0))
        .await
        .expect("insert succeeds");

    assert_eq!(row.temperature, 23.5);
    assert_eq!(row.humidity, 40.0);
    assert_eq!(row.timestamp, at(12));
}

#[sqlx::test(migrations = "../../migrations")]
async fn recent_measurements_are_newest_first(pool: SqlitePool) {
    for hour in [9, 11, 10] {
        MeasurementRepo::insert(&pool, &measurement(hour, f64::from(hour), 50.0))
            .await
            .expect("insert succeeds");
    }

    let rows = MeasurementRepo::recent(&pool, 100).await.expect("query succeeds");

    let hours: Vec<f64> = rows.iter().map(|r| r.temperature).collect();
    assert_eq!(hours, vec![11.0, 10.0, 9.0]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn recent_measurements_honor_the_limit(pool: SqlitePool) {
    for hour in 0..5 {
        MeasurementRepo::insert(&pool, &measurement(hour, f64::from(hour), 50.0))
            .await
            .expect("insert succeeds");
    }

    let rows = MeasurementRepo::recent(&pool, 2).await.expect("query succeeds");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].temperature, 4.0);
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn parameter_change_roundtrips(pool: SqlitePool) {
    let params = Parameters {
        threshold: Some(25.0),
        interval_secs: 2.5,
    };

    let row = ParameterRepo::insert(&pool, at(8), &params)
        .await
        .expect("insert succeeds");

    assert_eq!(row.threshold, Some(25.0));
    assert_eq!(row.interval, 2.5);
    assert_eq!(row.timestamp, at(8));
}

#[sqlx::test(migrations = "../../migrations")]
async fn absent_threshold_is_stored_as_null(pool: SqlitePool) {
    let row = ParameterRepo::insert(&pool, at(8), &Parameters::default())
        .await
        .expect("insert succeeds");

    assert_eq!(row.threshold, None);
    assert_eq!(row.interval, 1.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn parameter_history_is_newest_first_and_bounded(pool: SqlitePool) {
    for hour in 0..4 {
        let params = Parameters {
            threshold: Some(f64::from(hour)),
            interval_secs: 1.0,
        };
        ParameterRepo::insert(&pool, at(hour), &params)
            .await
            .expect("insert succeeds");
    }

    let rows = ParameterRepo::recent(&pool, 3).await.expect("query succeeds");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].threshold, Some(3.0));
    assert_eq!(rows[2].threshold, Some(1.0));
}

//! Repository for the `measurements` table (append-only time-series).

use klima_core::measurement::Measurement;
use sqlx::SqlitePool;

use crate::models::measurement::MeasurementRow;

/// Column list for `measurements` queries.
const COLUMNS: &str = "id, timestamp, temperature, humidity";

/// Provides query operations for measurements.
pub struct MeasurementRepo;

impl MeasurementRepo {
    /// Insert a single measurement.
    pub async fn insert(
        pool: &SqlitePool,
        measurement: &Measurement,
    ) -> Result<MeasurementRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO measurements (timestamp, temperature, humidity) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeasurementRow>(&query)
            .bind(measurement.timestamp)
            .bind(measurement.temperature)
            .bind(measurement.humidity)
            .fetch_one(pool)
            .await
    }

    /// Most recent rows, newest first.
    pub async fn recent(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<MeasurementRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM measurements ORDER BY timestamp DESC LIMIT $1");
        sqlx::query_as::<_, MeasurementRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

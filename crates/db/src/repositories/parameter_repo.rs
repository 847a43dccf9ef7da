//! Repository for the `parameters` table.
//!
//! Parameter changes are appended, never updated, so the table doubles as a
//! change history.

use klima_core::measurement::Parameters;
use klima_core::types::Timestamp;
use sqlx::SqlitePool;

use crate::models::parameter::ParameterRow;

/// Column list for `parameters` queries.
const COLUMNS: &str = "id, timestamp, threshold, interval";

/// Provides query operations for parameter changes.
pub struct ParameterRepo;

impl ParameterRepo {
    /// Append one parameter change, stamped with `at`.
    pub async fn insert(
        pool: &SqlitePool,
        at: Timestamp,
        params: &Parameters,
    ) -> Result<ParameterRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO parameters (timestamp, threshold, interval) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParameterRow>(&query)
            .bind(at)
            .bind(params.threshold)
            .bind(params.interval_secs)
            .fetch_one(pool)
            .await
    }

    /// Most recent rows, newest first.
    pub async fn recent(pool: &SqlitePool, limit: i64) -> Result<Vec<ParameterRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parameters ORDER BY timestamp DESC LIMIT $1");
        sqlx::query_as::<_, ParameterRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

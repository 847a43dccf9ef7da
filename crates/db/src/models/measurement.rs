//! Measurement rows (append-only).

use klima_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted measurement row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeasurementRow {
    pub id: DbId,
    pub timestamp: Timestamp,
    pub temperature: f64,
    pub humidity: f64,
}

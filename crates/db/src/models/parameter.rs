//! Parameter-change rows (append-only history of operator settings).

use klima_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted parameter-change row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ParameterRow {
    pub id: DbId,
    pub timestamp: Timestamp,
    /// `NULL` when the operator disabled alerting.
    pub threshold: Option<f64>,
    pub interval: f64,
}

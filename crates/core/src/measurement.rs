//! Measurement and parameter types shared by the loop, the stores, and the
//! API.

use serde::Serialize;

use crate::types::Timestamp;

/// A single paired sensor reading.
///
/// Created by the reading loop once both a temperature and a humidity value
/// have arrived for one cycle. Immutable after construction; copies live in
/// the in-memory history, the database, and the CSV log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub timestamp: Timestamp,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
}

impl Measurement {
    /// Build a measurement stamped with the current wall clock.
    pub fn now(temperature: f64, humidity: f64) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            temperature,
            humidity,
        }
    }
}

/// Default seconds between reading-loop iterations.
pub const DEFAULT_INTERVAL_SECS: f64 = 1.0;

/// Operator-set monitoring parameters.
///
/// Replaced wholesale by the set-parameters action. Only the latest value is
/// held in shared state; every change is appended to the durable stores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameters {
    /// Alert threshold in degrees Celsius. `None` disables alerting.
    pub threshold: Option<f64>,
    /// Seconds between reading-loop iterations.
    pub interval_secs: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            threshold: None,
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

impl Parameters {
    /// The configured threshold, when `temperature` strictly exceeds it.
    ///
    /// Always `None` when alerting is disabled.
    pub fn exceeded_threshold(&self, temperature: f64) -> Option<f64> {
        self.threshold.filter(|threshold| temperature > *threshold)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

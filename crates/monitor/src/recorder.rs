//! Dual-sink persistence for measurements and parameter changes.
//!
//! Every call writes the relational store first, then the flat-file log.
//! The sinks are deliberately uncoupled: a failure in one neither blocks nor
//! rolls back the other, and each result is reported separately so callers
//! and tests can observe partial failure.

use klima_core::measurement::{Measurement, Parameters};
use klima_core::types::Timestamp;
use klima_db::repositories::{MeasurementRepo, ParameterRepo};
use klima_db::DbPool;
use thiserror::Error;

use crate::logfile::LogFile;

/// Failure in a single sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("database write failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("log file write failed: {0}")]
    LogFile(#[from] std::io::Error),
}

/// Per-sink result of one record call.
#[derive(Debug)]
pub struct RecordOutcome {
    pub database: Result<(), SinkError>,
    pub logfile: Result<(), SinkError>,
}

impl RecordOutcome {
    /// True when both sinks accepted the write.
    pub fn is_complete(&self) -> bool {
        self.database.is_ok() && self.logfile.is_ok()
    }

    /// Log each failed sink.
    pub fn log_failures(&self, entity: &str) {
        if let Err(e) = &self.database {
            tracing::error!(entity, error = %e, "Durable write failed (database)");
        }
        if let Err(e) = &self.logfile {
            tracing::error!(entity, error = %e, "Durable write failed (log file)");
        }
    }
}

/// Writes measurements and parameter changes to SQLite and the CSV logs.
#[derive(Clone)]
pub struct Recorder {
    pool: DbPool,
    measurement_log: LogFile,
    parameter_log: LogFile,
}

impl Recorder {
    pub fn new(pool: DbPool, measurement_log: LogFile, parameter_log: LogFile) -> Self {
        Self {
            pool,
            measurement_log,
            parameter_log,
        }
    }

    /// Create both log files with their header rows if absent.
    pub async fn init_log_files(&self) -> std::io::Result<()> {
        self.measurement_log.ensure_exists().await?;
        self.parameter_log.ensure_exists().await
    }

    pub fn measurement_log(&self) -> &LogFile {
        &self.measurement_log
    }

    pub fn parameter_log(&self) -> &LogFile {
        &self.parameter_log
    }

    /// Record one measurement to both sinks.
    pub async fn record_measurement(&self, measurement: &Measurement) -> RecordOutcome {
        let database = MeasurementRepo::insert(&self.pool, measurement)
            .await
            .map(|_| ())
            .map_err(SinkError::from);
        let logfile = self
            .measurement_log
            .append_measurement(measurement)
            .await
            .map_err(SinkError::from);
        RecordOutcome { database, logfile }
    }

    /// Record one parameter change to both sinks.
    pub async fn record_parameters(&self, at: Timestamp, params: &Parameters) -> RecordOutcome {
        let database = ParameterRepo::insert(&self.pool, at, params)
            .await
            .map(|_| ())
            .map_err(SinkError::from);
        let logfile = self
            .parameter_log
            .append_parameters(at, params)
            .await
            .map_err(SinkError::from);
        RecordOutcome { database, logfile }
    }
}

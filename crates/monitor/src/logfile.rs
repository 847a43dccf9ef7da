//! Append-only CSV logs mirroring the durable tables.
//!
//! Each file is created with a header row on first use; every append is
//! flushed immediately. Field values never contain commas, so rows are
//! formatted and split directly.

use std::io;
use std::path::{Path, PathBuf};

use klima_core::measurement::{Measurement, Parameters};
use klima_core::types::Timestamp;
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

pub const MEASUREMENT_HEADER: &str = "timestamp,temperature,humidity";
pub const PARAMETER_HEADER: &str = "timestamp,threshold,interval";

/// One append-only CSV log file.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    header: &'static str,
}

/// A measurement row read back from the measurement log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedMeasurement {
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// A parameter-change row read back from the parameter log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedParameters {
    pub timestamp: String,
    pub threshold: Option<f64>,
    pub interval: f64,
}

impl LogFile {
    /// Measurement log (`timestamp,temperature,humidity`).
    pub fn measurements(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            header: MEASUREMENT_HEADER,
        }
    }

    /// Parameter log (`timestamp,threshold,interval`).
    pub fn parameters(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            header: PARAMETER_HEADER,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with its header row if it does not exist yet.
    pub async fn ensure_exists(&self) -> io::Result<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        tokio::fs::write(&self.path, format!("{}\n", self.header)).await
    }

    /// Append one measurement row.
    pub async fn append_measurement(&self, measurement: &Measurement) -> io::Result<()> {
        self.append_line(&format!(
            "{},{},{}",
            measurement.timestamp.to_rfc3339(),
            measurement.temperature,
            measurement.humidity
        ))
        .await
    }

    /// Append one parameter-change row; an absent threshold becomes an empty
    /// field.
    pub async fn append_parameters(&self, at: Timestamp, params: &Parameters) -> io::Result<()> {
        let threshold = params
            .threshold
            .map(|t| t.to_string())
            .unwrap_or_default();
        self.append_line(&format!(
            "{},{},{}",
            at.to_rfc3339(),
            threshold,
            params.interval_secs
        ))
        .await
    }

    /// Last `limit` measurement rows, oldest first. Malformed rows are
    /// skipped with a warning; a missing file yields an empty list.
    pub async fn tail_measurements(&self, limit: usize) -> io::Result<Vec<LoggedMeasurement>> {
        let rows = self.tail_rows(limit).await?;
        let mut out = Vec::with_capacity(rows.len());
        for fields in &rows {
            match parse_measurement_row(fields) {
                Some(row) => out.push(row),
                None => tracing::warn!(
                    path = %self.path.display(),
                    "Skipping malformed measurement log row"
                ),
            }
        }
        Ok(out)
    }

    /// Last `limit` parameter rows, oldest first.
    pub async fn tail_parameters(&self, limit: usize) -> io::Result<Vec<LoggedParameters>> {
        let rows = self.tail_rows(limit).await?;
        let mut out = Vec::with_capacity(rows.len());
        for fields in &rows {
            match parse_parameter_row(fields) {
                Some(row) => out.push(row),
                None => tracing::warn!(
                    path = %self.path.display(),
                    "Skipping malformed parameter log row"
                ),
            }
        }
        Ok(out)
    }

    async fn append_line(&self, line: &str) -> io::Result<()> {
        self.ensure_exists().await?;
        let mut file = OpenOptions::new().append(true).open(&self.path).await?;
        file.write_all(format!("{line}\n").as_bytes()).await?;
        file.flush().await
    }

    /// Data rows (header skipped) as comma-split fields, bounded to the last
    /// `limit`.
    async fn tail_rows(&self, limit: usize) -> io::Result<Vec<Vec<String>>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let rows: Vec<Vec<String>> = contents
            .lines()
            .skip(1)
            .filter(|line| !line.is_empty())
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();

        let skip = rows.len().saturating_sub(limit);
        Ok(rows.into_iter().skip(skip).collect())
    }
}

fn parse_measurement_row(fields: &[String]) -> Option<LoggedMeasurement> {
    match fields {
        [timestamp, temperature, humidity] => Some(LoggedMeasurement {
            timestamp: timestamp.clone(),
            temperature: temperature.parse().ok()?,
            humidity: humidity.parse().ok()?,
        }),
        _ => None,
    }
}

fn parse_parameter_row(fields: &[String]) -> Option<LoggedParameters> {
    match fields {
        [timestamp, threshold, interval] => Some(LoggedParameters {
            timestamp: timestamp.clone(),
            threshold: if threshold.is_empty() {
                None
            } else {
                Some(threshold.parse().ok()?)
            },
            interval: interval.parse().ok()?,
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

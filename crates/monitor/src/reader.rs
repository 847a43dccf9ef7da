//! The background reading loop.
//!
//! Owns the line source for its lifetime. Each iteration reads one line
//! (bounded by a short timeout), feeds it through the parser while
//! monitoring is active, and emits a measurement once both kinds of value
//! have arrived. Per-iteration failures are logged and the loop moves on;
//! only cancellation or end-of-stream stops it.

use std::sync::Arc;
use std::time::Duration;

use klima_core::pairing::PendingPair;
use klima_core::parser;
use tokio_util::sync::CancellationToken;

use crate::recorder::Recorder;
use crate::source::{LineSource, READ_TIMEOUT};
use crate::state::Monitor;

/// Run the reading loop until cancelled or the source is exhausted.
pub async fn run(
    monitor: Arc<Monitor>,
    recorder: Recorder,
    mut source: Box<dyn LineSource>,
    cancel: CancellationToken,
) {
    let mut pending = PendingPair::new();

    loop {
        let read = tokio::select! {
            _ = cancel.cancelled() => break,
            read = tokio::time::timeout(READ_TIMEOUT, source.next_line()) => read,
        };

        match read {
            // Read timeout: no line arrived this iteration.
            Err(_) => {}
            Ok(Ok(Some(line))) => {
                handle_line(&monitor, &recorder, &mut pending, &line).await;
            }
            Ok(Ok(None)) => {
                tracing::warn!("Line source exhausted, stopping reading loop");
                monitor.mark_disconnected().await;
                break;
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Error reading from serial connection");
            }
        }

        let interval_secs = monitor.parameters().await.interval_secs;
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(Duration::from_secs_f64(interval_secs.max(0.0))) => {}
        }
    }

    tracing::info!("Reading loop stopped");
}

/// Process one received line.
async fn handle_line(
    monitor: &Monitor,
    recorder: &Recorder,
    pending: &mut PendingPair,
    line: &str,
) {
    tracing::debug!(line, "Received sensor line");

    // Inactive monitoring still consumes I/O; shared state stays untouched.
    if !monitor.monitoring_enabled().await {
        return;
    }

    if let Some(value) = parser::parse_line(line) {
        pending.record(value);
    }

    let Some(measurement) = pending.take_measurement() else {
        return;
    };

    monitor.push_measurement(measurement.clone()).await;

    let outcome = recorder.record_measurement(&measurement).await;
    outcome.log_failures("measurement");

    let params = monitor.parameters().await;
    if let Some(threshold) = params.exceeded_threshold(measurement.temperature) {
        tracing::warn!(
            temperature = measurement.temperature,
            threshold,
            "Temperature threshold exceeded"
        );
    }
}

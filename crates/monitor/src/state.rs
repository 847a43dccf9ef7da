//! Shared monitoring state and connection lifecycle.

use std::sync::Arc;
use std::time::Duration;

use klima_core::history::BoundedHistory;
use klima_core::measurement::{Measurement, Parameters};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::reader;
use crate::recorder::Recorder;
use crate::source::{LineSource, SerialConfig, SerialLineSource};

/// Snapshot of the control flags and current parameters.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorStatus {
    pub connected: bool,
    pub monitoring: bool,
    pub parameters: Parameters,
}

/// Result of an open attempt.
///
/// Open never surfaces an error to the HTTP caller; the variants keep the
/// double-open guard and the failure path observable in logs and tests.
#[derive(Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    AlreadyOpen,
    Failed,
}

#[derive(Default)]
struct Inner {
    connected: bool,
    monitoring: bool,
    params: Parameters,
    history: BoundedHistory,
    cancel: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
}

/// Process-wide monitoring state.
///
/// All mutable state sits behind one async mutex; the reading loop and the
/// request handlers take short critical sections. A flag flip may still be
/// observed by the loop up to one read-timeout-plus-interval late, which is
/// accepted behavior.
pub struct Monitor {
    inner: Mutex<Inner>,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Monitor {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Open the serial port and spawn the reading loop.
    ///
    /// A failure to open is logged and leaves the state unopened; a second
    /// open while a connection is active is rejected without touching the
    /// existing connection.
    pub async fn open_serial(
        self: Arc<Self>,
        config: &SerialConfig,
        recorder: Recorder,
    ) -> OpenOutcome {
        if self.inner.lock().await.connected {
            tracing::warn!("Connection already open, ignoring open request");
            return OpenOutcome::AlreadyOpen;
        }

        match SerialLineSource::open(config) {
            Ok(source) => self.open_with_source(Box::new(source), recorder).await,
            Err(e) => {
                tracing::error!(device = %config.device, error = %e, "Failed to open serial connection");
                OpenOutcome::Failed
            }
        }
    }

    /// Open using an already-built line source.
    pub async fn open_with_source(
        self: Arc<Self>,
        source: Box<dyn LineSource>,
        recorder: Recorder,
    ) -> OpenOutcome {
        let mut inner = self.inner.lock().await;
        if inner.connected {
            tracing::warn!("Connection already open, ignoring open request");
            return OpenOutcome::AlreadyOpen;
        }

        let cancel = CancellationToken::new();
        let task = tokio::spawn(reader::run(
            Arc::clone(&self),
            recorder,
            source,
            cancel.clone(),
        ));

        inner.connected = true;
        inner.cancel = Some(cancel);
        inner.task = Some(task);
        tracing::info!("Serial connection opened, reading loop started");
        OpenOutcome::Opened
    }

    /// Cancel the reading loop and reset all state.
    ///
    /// History and parameters are cleared; the port handle is released when
    /// the loop task drops its source.
    pub async fn close(&self) {
        let (cancel, task) = {
            let mut inner = self.inner.lock().await;
            inner.connected = false;
            inner.monitoring = false;
            inner.params = Parameters::default();
            inner.history.clear();
            (inner.cancel.take(), inner.task.take())
        };

        if let Some(cancel) = cancel {
            cancel.cancel();
        }
        if let Some(task) = task {
            // The loop observes cancellation within one iteration.
            let _ = tokio::time::timeout(Duration::from_secs(5), task).await;
        }
        tracing::info!("Serial connection closed");
    }

    pub async fn start_monitoring(&self) {
        self.inner.lock().await.monitoring = true;
        tracing::info!("Monitoring started");
    }

    pub async fn stop_monitoring(&self) {
        self.inner.lock().await.monitoring = false;
        tracing::info!("Monitoring stopped");
    }

    /// Replace the current parameters wholesale.
    pub async fn set_parameters(&self, params: Parameters) {
        self.inner.lock().await.params = params;
    }

    pub async fn status(&self) -> MonitorStatus {
        let inner = self.inner.lock().await;
        MonitorStatus {
            connected: inner.connected,
            monitoring: inner.monitoring,
            parameters: inner.params.clone(),
        }
    }

    pub async fn parameters(&self) -> Parameters {
        self.inner.lock().await.params.clone()
    }

    /// Oldest-first copy of the in-memory history.
    pub async fn live_history(&self) -> Vec<Measurement> {
        self.inner.lock().await.history.snapshot()
    }

    /// Most recent pair, if any.
    pub async fn latest(&self) -> Option<Measurement> {
        self.inner.lock().await.history.latest().cloned()
    }

    pub(crate) async fn monitoring_enabled(&self) -> bool {
        self.inner.lock().await.monitoring
    }

    pub(crate) async fn push_measurement(&self, measurement: Measurement) {
        self.inner.lock().await.history.push(measurement);
    }

    /// Called by the loop when the source reports end-of-stream.
    pub(crate) async fn mark_disconnected(&self) {
        let mut inner = self.inner.lock().await;
        inner.connected = false;
        inner.cancel = None;
    }
}

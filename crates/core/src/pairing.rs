//! Pending-pair accumulation for the reading loop.
//!
//! Pairing is "most recent unconsumed value of each kind": a second
//! temperature line arriving before any humidity line overwrites the pending
//! temperature. There is no timestamp correlation between the two lines.

use crate::measurement::Measurement;
use crate::parser::SensorValue;

/// The not-yet-emitted temperature and humidity values held between loop
/// iterations.
#[derive(Debug, Default)]
pub struct PendingPair {
    temperature: Option<f64>,
    humidity: Option<f64>,
}

impl PendingPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one parsed value, overwriting any pending value of the same
    /// kind.
    pub fn record(&mut self, value: SensorValue) {
        match value {
            SensorValue::Temperature(v) => self.temperature = Some(v),
            SensorValue::Humidity(v) => self.humidity = Some(v),
        }
    }

    /// Take a completed pair as a freshly stamped measurement.
    ///
    /// Returns `None` until both kinds have been recorded since the last
    /// emission. On emission both slots are cleared, so the next pair must be
    /// freshly observed.
    pub fn take_measurement(&mut self) -> Option<Measurement> {
        match (self.temperature, self.humidity) {
            (Some(temperature), Some(humidity)) => {
                self.temperature = None;
                self.humidity = None;
                Some(Measurement::now(temperature, humidity))
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

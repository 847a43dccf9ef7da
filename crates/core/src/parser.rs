//! Sensor line parser.
//!
//! The sensor emits line-oriented text with exactly two recognized shapes,
//! `Temperature:<value>°C` and `Humidity:<value>%`. Anything else is
//! ignored. A recognized label with an unparseable value is logged and
//! dropped; parsing never surfaces an error to the caller.

/// A single value extracted from one sensor line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorValue {
    /// Degrees Celsius.
    Temperature(f64),
    /// Relative humidity, percent.
    Humidity(f64),
}

/// Parse one trimmed sensor line.
pub fn parse_line(line: &str) -> Option<SensorValue> {
    if line.contains("Temperature:") {
        return match parse_value(line, "°C") {
            Some(value) => Some(SensorValue::Temperature(value)),
            None => {
                tracing::warn!(line, "Failed to parse temperature");
                None
            }
        };
    }

    if line.contains("Humidity:") {
        return match parse_value(line, "%") {
            Some(value) => Some(SensorValue::Humidity(value)),
            None => {
                tracing::warn!(line, "Failed to parse humidity");
                None
            }
        };
    }

    None
}

/// Split on the first colon, strip the trailing unit suffix, parse as `f64`.
fn parse_value(line: &str, unit: &str) -> Option<f64> {
    let (_, rest) = line.split_once(':')?;
    rest.trim().trim_end_matches(unit).trim().parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Line-oriented transport seam between the reading loop and the sensor.
//!
//! Production uses a serial port; tests substitute a scripted source to
//! drive the loop deterministically.

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_serial::{SerialPortBuilderExt, SerialStream};

/// How long one read may block before the loop gives up for this iteration.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Serial connection settings.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Device path, e.g. `/dev/ttyS0`.
    pub device: String,
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            device: "/dev/ttyS0".to_string(),
            baud_rate: 9600,
        }
    }
}

/// A source of trimmed sensor text lines.
#[async_trait]
pub trait LineSource: Send {
    /// Read the next line. `Ok(None)` means the stream is exhausted and the
    /// loop should stop.
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// [`LineSource`] over an open serial port.
pub struct SerialLineSource {
    reader: BufReader<SerialStream>,
}

impl SerialLineSource {
    /// Open `device` at `baud_rate`.
    pub fn open(config: &SerialConfig) -> Result<Self, tokio_serial::Error> {
        let stream = tokio_serial::new(&config.device, config.baud_rate).open_native_async()?;
        tracing::info!(device = %config.device, baud_rate = config.baud_rate, "Serial port opened");
        Ok(Self {
            reader: BufReader::new(stream),
        })
    }
}

#[async_trait]
impl LineSource for SerialLineSource {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let n = self.reader.read_until(b'\n', &mut buf).await?;
        if n == 0 {
            return Ok(None);
        }
        // Invalid byte sequences are replaced rather than failing the read.
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}

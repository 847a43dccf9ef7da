use klima_monitor::source::SerialConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Serial device the sensor is attached to.
    pub serial_device: String,
    /// Serial baud rate.
    pub serial_baud: u32,
    /// CSV measurement log path.
    pub measurement_log_path: String,
    /// CSV parameter log path.
    pub parameter_log_path: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `5000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `SERIAL_DEVICE`        | `/dev/ttyS0`            |
    /// | `SERIAL_BAUD`          | `9600`                  |
    /// | `MEASUREMENT_LOG_PATH` | `measurements.csv`      |
    /// | `PARAMETER_LOG_PATH`   | `parameters.csv`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let serial_device =
            std::env::var("SERIAL_DEVICE").unwrap_or_else(|_| "/dev/ttyS0".into());

        let serial_baud: u32 = std::env::var("SERIAL_BAUD")
            .unwrap_or_else(|_| "9600".into())
            .parse()
            .expect("SERIAL_BAUD must be a valid u32");

        let measurement_log_path =
            std::env::var("MEASUREMENT_LOG_PATH").unwrap_or_else(|_| "measurements.csv".into());

        let parameter_log_path =
            std::env::var("PARAMETER_LOG_PATH").unwrap_or_else(|_| "parameters.csv".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            serial_device,
            serial_baud,
            measurement_log_path,
            parameter_log_path,
        }
    }

    /// Serial settings for the monitor crate.
    pub fn serial_config(&self) -> SerialConfig {
        SerialConfig {
            device: self.serial_device.clone(),
            baud_rate: self.serial_baud,
        }
    }
}

//! Telemetry Configuration

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Base filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON lines instead of human-readable text
    pub json_logs: bool,
    /// Surface `tower_http` request/response spans at debug level
    pub access_log: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            access_log: true,
        }
    }
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            json_logs: std::env::var("JSON_LOGS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            access_log: std::env::var("ACCESS_LOG")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    /// Filter directives applied when `RUST_LOG` does not override them
    pub fn filter_directives(&self) -> String {
        if self.access_log {
            format!("{},tower_http=debug", self.log_level)
        } else {
            self.log_level.clone()
        }
    }
}

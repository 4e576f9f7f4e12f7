use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging and telemetry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
    /// Number of outcome events kept by the in-memory telemetry log.
    pub telemetry_capacity: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
            telemetry_capacity: defaults::DEFAULT_TELEMETRY_CAPACITY,
        }
    }
}

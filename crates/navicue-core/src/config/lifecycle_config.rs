use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_STAGE_DURATION_MS;
use crate::errors::ConfigError;

/// Stage timing for the interaction lifecycle, in milliseconds.
///
/// Individual cues may override the arriving/present delays and the
/// timer/hold durations through their `CueTiming`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub arriving_ms: u64,
    pub present_ms: u64,
    /// Delay between a single-select choice and the automatic transition.
    pub select_confirm_ms: u64,
    pub resonant_ms: u64,
    pub default_timer_ms: u64,
    pub default_hold_ms: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            arriving_ms: defaults::DEFAULT_ARRIVING_MS,
            present_ms: defaults::DEFAULT_PRESENT_MS,
            select_confirm_ms: defaults::DEFAULT_SELECT_CONFIRM_MS,
            resonant_ms: defaults::DEFAULT_RESONANT_MS,
            default_timer_ms: defaults::DEFAULT_TIMER_MS,
            default_hold_ms: defaults::DEFAULT_HOLD_MS,
        }
    }
}

impl LifecycleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("lifecycle.arriving_ms", self.arriving_ms),
            ("lifecycle.present_ms", self.present_ms),
            ("lifecycle.select_confirm_ms", self.select_confirm_ms),
            ("lifecycle.resonant_ms", self.resonant_ms),
            ("lifecycle.default_timer_ms", self.default_timer_ms),
            ("lifecycle.default_hold_ms", self.default_hold_ms),
        ];
        for (field, value) in fields {
            if value > MAX_STAGE_DURATION_MS {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{value}ms exceeds {MAX_STAGE_DURATION_MS}ms"),
                });
            }
        }
        if self.default_hold_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "lifecycle.default_hold_ms".to_string(),
                reason: "hold target must be positive".to_string(),
            });
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use super::{defaults, non_negative};
use crate::errors::ConfigError;

/// Capacities and fatigue rules for the per-session mindblock state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Size of the "recently shown" cue id window.
    pub recent_shown_capacity: usize,
    /// Size of the recently reinforced tag window.
    pub recent_tag_capacity: usize,
    /// Fatigue removed by a completed cue.
    pub fatigue_relief: f64,
    /// Fatigue added by a deferred cue.
    pub defer_fatigue: f64,
    /// Fatigue added by a skipped cue.
    pub skip_fatigue: f64,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            recent_shown_capacity: defaults::DEFAULT_RECENT_SHOWN_CAPACITY,
            recent_tag_capacity: defaults::DEFAULT_RECENT_TAG_CAPACITY,
            fatigue_relief: defaults::DEFAULT_FATIGUE_RELIEF,
            defer_fatigue: defaults::DEFAULT_DEFER_FATIGUE,
            skip_fatigue: defaults::DEFAULT_SKIP_FATIGUE,
        }
    }
}

impl StateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_shown_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "state.recent_shown_capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.recent_tag_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "state.recent_tag_capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        non_negative("state.fatigue_relief", self.fatigue_relief)?;
        non_negative("state.defer_fatigue", self.defer_fatigue)?;
        non_negative("state.skip_fatigue", self.skip_fatigue)?;
        Ok(())
    }
}

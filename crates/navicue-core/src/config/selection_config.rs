use serde::{Deserialize, Serialize};

use super::{defaults, non_negative};
use crate::errors::ConfigError;

/// Weights used by the selector when scoring candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Starting weight of every candidate.
    pub base_weight: f64,
    /// Reward per tag shared with the user's preferred tags.
    pub preferred_tag_reward: f64,
    /// Penalty per occurrence of a cue tag in the recently reinforced window.
    pub diversity_penalty: f64,
    /// Bonus for a cue the user deferred earlier ("continue later").
    pub open_loop_bonus: f64,
    /// Bonus for low-effort cues, multiplied by the current fatigue.
    pub low_effort_bonus: f64,
    /// Amplitude of seeded jitter. Zero disables it.
    pub jitter: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            base_weight: defaults::DEFAULT_BASE_WEIGHT,
            preferred_tag_reward: defaults::DEFAULT_PREFERRED_TAG_REWARD,
            diversity_penalty: defaults::DEFAULT_DIVERSITY_PENALTY,
            open_loop_bonus: defaults::DEFAULT_OPEN_LOOP_BONUS,
            low_effort_bonus: defaults::DEFAULT_LOW_EFFORT_BONUS,
            jitter: defaults::DEFAULT_JITTER,
        }
    }
}

impl SelectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("selection.preferred_tag_reward", self.preferred_tag_reward)?;
        non_negative("selection.diversity_penalty", self.diversity_penalty)?;
        non_negative("selection.open_loop_bonus", self.open_loop_bonus)?;
        non_negative("selection.low_effort_bonus", self.low_effort_bonus)?;
        non_negative("selection.jitter", self.jitter)?;
        if !self.base_weight.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "selection.base_weight".to_string(),
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }
}

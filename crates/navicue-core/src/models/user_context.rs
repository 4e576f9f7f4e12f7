use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use ts_rs::TS;

/// Preferred voice of cue copy. Passed through to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Gentle,
    Direct,
    Playful,
}

/// Preferred tempo of stage transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    Slow,
    #[default]
    Steady,
    Brisk,
}

impl Pacing {
    /// Multiplier applied to automatic stage delays.
    pub fn factor(self) -> f64 {
        match self {
            Self::Slow => 1.5,
            Self::Steady => 1.0,
            Self::Brisk => 0.75,
        }
    }

    /// Scale a delay in milliseconds. Saturates at `u64::MAX`.
    pub fn scale(self, ms: u64) -> u64 {
        (ms as f64 * self.factor()).round() as u64
    }
}

/// Slowly-changing user profile. Read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct UserContext {
    pub user_id: String,
    pub tone: Tone,
    pub pacing: Pacing,
    /// Themes the user responds well to.
    pub preferred_tags: BTreeSet<String>,
    /// Accumulated trait signals, keyed by trait name, in [0.0, 1.0].
    pub trait_signals: BTreeMap<String, f64>,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn with_preferred_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_trait_signal(mut self, name: impl Into<String>, value: f64) -> Self {
        self.trait_signals.insert(name.into(), value.clamp(0.0, 1.0));
        self
    }

    pub fn prefers(&self, tag: &str) -> bool {
        self.preferred_tags.contains(tag)
    }

    pub fn trait_signal(&self, name: &str) -> Option<f64> {
        self.trait_signals.get(name).copied()
    }
}

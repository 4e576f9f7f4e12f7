use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Presentation stage of one cue, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    Arriving,
    Present,
    Active,
    Resonant,
    Afterglow,
}

impl LifecycleStage {
    /// The only stage that accepts user input.
    pub fn accepts_input(self) -> bool {
        self == Self::Active
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Afterglow
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arriving => "arriving",
            Self::Present => "present",
            Self::Active => "active",
            Self::Resonant => "resonant",
            Self::Afterglow => "afterglow",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

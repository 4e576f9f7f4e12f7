use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// How a cue collects its response while `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ResponseKind {
    Text,
    Select,
    Multiselect,
    Timer,
    Hold,
    SitWithIt,
    None,
}

impl ResponseKind {
    /// All response kinds.
    pub const ALL: [ResponseKind; 7] = [
        Self::Text,
        Self::Select,
        Self::Multiselect,
        Self::Timer,
        Self::Hold,
        Self::SitWithIt,
        Self::None,
    ];

    /// Whether this kind carries an option list.
    pub fn requires_options(self) -> bool {
        matches!(self, Self::Select | Self::Multiselect)
    }

    /// Whether "continue later" is offered while active.
    pub fn accepts_deferral(self) -> bool {
        !matches!(self, Self::SitWithIt)
    }

    /// Kinds that ask nothing of the user beyond staying present.
    pub fn is_low_effort(self) -> bool {
        matches!(self, Self::Timer | Self::SitWithIt | Self::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Timer => "timer",
            Self::Hold => "hold",
            Self::SitWithIt => "sitWithIt",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

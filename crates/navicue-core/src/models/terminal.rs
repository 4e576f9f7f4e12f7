use serde::{Deserialize, Serialize};

use super::outcome::OutcomeKind;
use crate::cue::ResponseKind;

/// Raw response captured by the lifecycle controller, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RawInput {
    /// Untrimmed text buffer.
    Text(String),
    /// Chosen option values, in the order they were chosen.
    Selected(Vec<String>),
    /// A hold, timer, or sit-with-it interaction ran to completion.
    Completed,
    /// No payload (deferred, skipped, or `none` cues).
    Nothing,
}

/// The one-time hand-off from a finished lifecycle to the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalState {
    pub cue_id: String,
    pub response_kind: ResponseKind,
    pub outcome_kind: OutcomeKind,
    pub raw: RawInput,
    /// Controller generation at the moment the lifecycle ended.
    pub generation: u64,
    /// Clock value (ms) when `active` was entered, if it ever was.
    pub active_entered_at: Option<u64>,
    /// Clock value (ms) when `afterglow` was entered.
    pub ended_at: u64,
}

impl TerminalState {
    /// Time spent in the interaction, when it reached `active`.
    pub fn engaged_ms(&self) -> Option<u64> {
        self.active_entered_at
            .map(|entered| self.ended_at.saturating_sub(entered))
    }
}

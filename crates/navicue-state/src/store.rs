//! UserStateStore: single-writer owner of one user's session state.

use serde::{Deserialize, Serialize};

use navicue_core::config::StateConfig;
use navicue_core::{CueOutcome, UserContext};

use crate::mindblock::MindblockState;

/// Serializable view handed to the persistence layer at session end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub context: UserContext,
    pub mindblock: MindblockState,
    pub history: Vec<CueOutcome>,
}

/// Per-user state for one session.
#[derive(Debug, Clone)]
pub struct UserStateStore {
    context: UserContext,
    mindblock: MindblockState,
    history: Vec<CueOutcome>,
    config: StateConfig,
}

impl UserStateStore {
    /// Fresh session: empty mindblock, empty history.
    pub fn new(context: UserContext, config: StateConfig) -> Self {
        Self {
            context,
            mindblock: MindblockState::from_config(&config),
            history: Vec::new(),
            config,
        }
    }

    /// Resume from state handed back by the persistence layer.
    pub fn restore(snapshot: StateSnapshot, config: StateConfig) -> Self {
        Self {
            context: snapshot.context,
            mindblock: snapshot.mindblock,
            history: snapshot.history,
            config,
        }
    }

    /// Start a session with an explicitly built mindblock.
    pub fn with_mindblock(context: UserContext, mindblock: MindblockState, config: StateConfig) -> Self {
        Self {
            context,
            mindblock,
            history: Vec::new(),
            config,
        }
    }

    pub fn context(&self) -> &UserContext {
        &self.context
    }

    pub fn mindblock(&self) -> &MindblockState {
        &self.mindblock
    }

    /// Applied outcomes, oldest first.
    pub fn history(&self) -> &[CueOutcome] {
        &self.history
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    /// Apply an outcome to the mindblock and append it to history.
    pub fn record_outcome(&mut self, outcome: CueOutcome) -> &CueOutcome {
        self.mindblock.record(&outcome, &self.config);
        tracing::debug!(
            user_id = %self.context.user_id,
            cue_id = %outcome.cue_id(),
            outcome = %outcome.outcome_kind(),
            fatigue = self.mindblock.fatigue(),
            "outcome recorded"
        );
        self.history.push(outcome);
        &self.history[self.history.len() - 1]
    }

    /// Clone the current state for persistence.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            context: self.context.clone(),
            mindblock: self.mindblock.clone(),
            history: self.history.clone(),
        }
    }

    /// Consume the store, handing its state to the persistence layer.
    pub fn into_snapshot(self) -> StateSnapshot {
        StateSnapshot {
            context: self.context,
            mindblock: self.mindblock,
            history: self.history,
        }
    }
}

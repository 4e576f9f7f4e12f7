//! MindblockState: the fast-changing session signal the selector reads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use navicue_core::config::StateConfig;
use navicue_core::{CueOutcome, OutcomeKind};

use crate::window::RecentWindow;

/// Rolling behavioral signal for one session.
///
/// Fields are private: outside this crate the state is read-only, and inside
/// it only `UserStateStore::record_outcome` calls [`MindblockState::record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindblockState {
    recently_shown: RecentWindow<String>,
    recent_tags_reinforced: RecentWindow<String>,
    /// Fatigue / resistance scalar in [0.0, 1.0].
    fatigue: f64,
    /// Cues the user deferred with "continue later" and has not finished since.
    open_loops: BTreeSet<String>,
    /// Number of outcomes recorded this session.
    presentations: u64,
}

impl MindblockState {
    /// Empty state with the given window capacities.
    pub fn new(recent_capacity: usize, tag_capacity: usize) -> Self {
        Self {
            recently_shown: RecentWindow::with_capacity(recent_capacity),
            recent_tags_reinforced: RecentWindow::with_capacity(tag_capacity),
            fatigue: 0.0,
            open_loops: BTreeSet::new(),
            presentations: 0,
        }
    }

    /// Empty state sized from config.
    pub fn from_config(config: &StateConfig) -> Self {
        Self::new(config.recent_shown_capacity, config.recent_tag_capacity)
    }

    /// Rebuild a state handed back by the persistence layer.
    pub fn builder(recent_capacity: usize, tag_capacity: usize) -> MindblockBuilder {
        MindblockBuilder {
            state: Self::new(recent_capacity, tag_capacity),
        }
    }

    /// Ids of recently presented cues, oldest first.
    pub fn recently_shown(&self) -> &RecentWindow<String> {
        &self.recently_shown
    }

    /// Tags reinforced by recent completions, oldest first.
    pub fn recent_tags_reinforced(&self) -> &RecentWindow<String> {
        &self.recent_tags_reinforced
    }

    /// Current fatigue in [0.0, 1.0].
    pub fn fatigue(&self) -> f64 {
        self.fatigue
    }

    /// Ids of deferred cues not yet completed or skipped.
    pub fn open_loops(&self) -> &BTreeSet<String> {
        &self.open_loops
    }

    /// Whether `cue_id` was deferred and is still open.
    pub fn is_open_loop(&self, cue_id: &str) -> bool {
        self.open_loops.contains(cue_id)
    }

    /// Number of outcomes recorded so far.
    pub fn presentations(&self) -> u64 {
        self.presentations
    }

    /// Fold one outcome into the state.
    pub(crate) fn record(&mut self, outcome: &CueOutcome, config: &StateConfig) {
        let cue_id = outcome.cue_id().to_string();
        if let Some(evicted) = self.recently_shown.push(cue_id.clone()) {
            tracing::trace!(evicted = %evicted, "recently shown window full");
        }
        for tag in outcome.tags_reinforced() {
            self.recent_tags_reinforced.push(tag.clone());
        }

        let delta = match outcome.outcome_kind() {
            OutcomeKind::Completed => -config.fatigue_relief,
            OutcomeKind::Deferred => config.defer_fatigue,
            OutcomeKind::Skipped => config.skip_fatigue,
        };
        self.fatigue = (self.fatigue + delta).clamp(0.0, 1.0);

        match outcome.outcome_kind() {
            OutcomeKind::Deferred => {
                self.open_loops.insert(cue_id);
            }
            OutcomeKind::Completed | OutcomeKind::Skipped => {
                self.open_loops.remove(&cue_id);
            }
        }

        self.presentations += 1;
    }
}

/// Builder for restoring a persisted [`MindblockState`].
#[derive(Debug, Clone)]
pub struct MindblockBuilder {
    state: MindblockState,
}

impl MindblockBuilder {
    /// Recently shown ids, oldest first. Overflow evicts as usual.
    pub fn shown<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.state.recently_shown.push(id.into());
        }
        self
    }

    /// Recently reinforced tags, oldest first.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.state.recent_tags_reinforced.push(tag.into());
        }
        self
    }

    pub fn fatigue(mut self, fatigue: f64) -> Self {
        self.state.fatigue = fatigue.clamp(0.0, 1.0);
        self
    }

    pub fn open_loop(mut self, cue_id: impl Into<String>) -> Self {
        self.state.open_loops.insert(cue_id.into());
        self
    }

    pub fn presentations(mut self, presentations: u64) -> Self {
        self.state.presentations = presentations;
        self
    }

    pub fn build(self) -> MindblockState {
        self.state
    }
}

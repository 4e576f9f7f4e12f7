//! Per-session analytics: outcome counts, completion rate, tag reinforcement,
//! rejected inputs, and engagement time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use navicue_core::{CueOutcome, OutcomeKind, ResponseKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalytics {
    pub presented: u64,
    pub completed: u64,
    pub deferred: u64,
    pub skipped: u64,
    /// Presentations torn down before reaching a terminal state.
    pub abandoned: u64,
    /// Inputs refused with a validation error.
    pub rejected_inputs: u64,
    /// Tag → times reinforced within this session.
    pub tag_reinforcement: HashMap<String, u64>,
    /// Response kind → times presented.
    pub kind_distribution: HashMap<ResponseKind, u64>,
    /// Milliseconds from entering `active` to the end of each presentation.
    pub engaged_ms: Vec<u64>,
}

impl SessionAnalytics {
    pub fn record_presented(&mut self, kind: ResponseKind) {
        self.presented += 1;
        *self.kind_distribution.entry(kind).or_insert(0) += 1;
    }

    pub fn record_outcome(&mut self, outcome: &CueOutcome, engaged_ms: Option<u64>) {
        match outcome.outcome_kind() {
            OutcomeKind::Completed => self.completed += 1,
            OutcomeKind::Deferred => self.deferred += 1,
            OutcomeKind::Skipped => self.skipped += 1,
        }
        for tag in outcome.tags_reinforced() {
            *self.tag_reinforcement.entry(tag.clone()).or_insert(0) += 1;
        }
        if let Some(ms) = engaged_ms {
            self.engaged_ms.push(ms);
        }
    }

    pub fn record_abandoned(&mut self) {
        self.abandoned += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejected_inputs += 1;
    }

    /// Number of presentations that reached a terminal state.
    pub fn finished(&self) -> u64 {
        self.completed + self.deferred + self.skipped
    }

    /// Completed share of finished presentations; 0.0 before any finish.
    pub fn completion_rate(&self) -> f64 {
        match self.finished() {
            0 => 0.0,
            n => self.completed as f64 / n as f64,
        }
    }

    /// Most reinforced tags, descending; ties by tag name.
    pub fn most_reinforced(&self, limit: usize) -> Vec<(String, u64)> {
        let mut sorted: Vec<_> = self.tag_reinforcement.clone().into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted.truncate(limit);
        sorted
    }

    pub fn avg_engaged_ms(&self) -> f64 {
        if self.engaged_ms.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.engaged_ms.iter().sum();
        sum as f64 / self.engaged_ms.len() as f64
    }
}

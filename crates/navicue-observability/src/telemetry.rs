//! In-memory analytics feed of applied outcomes.
//!
//! Keeps the most recent events up to a fixed capacity. Stands in for an
//! external analytics transport, which is out of scope for the engine.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use navicue_core::errors::{NavicueError, NavicueResult};
use navicue_core::traits::IOutcomeSink;
use navicue_core::{CueOutcome, OutcomeKind};

/// One recorded outcome event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub outcome_id: String,
    pub cue_id: String,
    pub outcome_kind: OutcomeKind,
    pub tags_reinforced: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<&CueOutcome> for TelemetryEvent {
    fn from(outcome: &CueOutcome) -> Self {
        Self {
            outcome_id: outcome.outcome_id().to_string(),
            cue_id: outcome.cue_id().to_string(),
            outcome_kind: outcome.outcome_kind(),
            tags_reinforced: outcome.tags_reinforced().to_vec(),
            timestamp: outcome.timestamp(),
        }
    }
}

/// Bounded ring of telemetry events.
#[derive(Debug)]
pub struct TelemetryLog {
    events: Mutex<VecDeque<TelemetryEvent>>,
    capacity: usize,
}

impl TelemetryLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an event, dropping the oldest when full.
    pub fn record(&self, event: TelemetryEvent) -> NavicueResult<()> {
        let mut events = self.events.lock().map_err(|e| NavicueError::SinkFailed {
            sink: "telemetry".to_string(),
            reason: e.to_string(),
        })?;
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event);
        Ok(())
    }

    /// Copy of the recorded events, oldest first.
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .map(|events| events.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    /// Serialize the log as a JSON array, e.g. for a debug dump.
    pub fn to_json(&self) -> NavicueResult<serde_json::Value> {
        serde_json::to_value(self.events()).map_err(NavicueError::SerializationError)
    }
}

impl Default for TelemetryLog {
    fn default() -> Self {
        Self::new(navicue_core::config::defaults::DEFAULT_TELEMETRY_CAPACITY)
    }
}

impl IOutcomeSink for TelemetryLog {
    fn name(&self) -> &str {
        "telemetry"
    }

    fn on_outcome(&self, outcome: &CueOutcome) -> NavicueResult<()> {
        tracing::info!(
            cue_id = %outcome.cue_id(),
            outcome = %outcome.outcome_kind(),
            tags = ?outcome.tags_reinforced(),
            "cue outcome"
        );
        self.record(TelemetryEvent::from(outcome))
    }
}

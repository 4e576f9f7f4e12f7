use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// How a presentation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Completed,
    /// "Continue later".
    Deferred,
    Skipped,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Completed => "completed",
            Self::Deferred => "deferred",
            Self::Skipped => "skipped",
        })
    }
}

/// Canonical payload shape, independent of the response kind that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum OutcomePayload {
    Text(String),
    Selected(Vec<String>),
    Completion(bool),
    Empty,
}

/// Normalized result of one presentation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CueOutcome {
    outcome_id: String,
    cue_id: String,
    outcome_kind: OutcomeKind,
    payload: OutcomePayload,
    tags_reinforced: Vec<String>,
    timestamp: DateTime<Utc>,
}

impl CueOutcome {
    pub fn new(
        cue_id: impl Into<String>,
        outcome_kind: OutcomeKind,
        payload: OutcomePayload,
        tags_reinforced: Vec<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            outcome_id: uuid::Uuid::new_v4().to_string(),
            cue_id: cue_id.into(),
            outcome_kind,
            payload,
            tags_reinforced,
            timestamp,
        }
    }

    pub fn outcome_id(&self) -> &str {
        &self.outcome_id
    }

    pub fn cue_id(&self) -> &str {
        &self.cue_id
    }

    pub fn outcome_kind(&self) -> OutcomeKind {
        self.outcome_kind
    }

    pub fn payload(&self) -> &OutcomePayload {
        &self.payload
    }

    pub fn tags_reinforced(&self) -> &[String] {
        &self.tags_reinforced
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_completed(&self) -> bool {
        self.outcome_kind == OutcomeKind::Completed
    }
}

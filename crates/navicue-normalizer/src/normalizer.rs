use std::sync::Arc;

use chrono::{DateTime, Utc};

use navicue_core::traits::IOutcomeSink;
use navicue_core::{CueDefinition, CueOutcome, TerminalState};
use navicue_observability::normalize_span;
use navicue_state::UserStateStore;

use crate::normalize::{apply, normalize};

/// Normalizes terminal states, applies them, and fans the result out to sinks.
#[derive(Clone, Default)]
pub struct Normalizer {
    sinks: Vec<Arc<dyn IOutcomeSink>>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink. Sinks are notified in registration order.
    pub fn with_sink(mut self, sink: Arc<dyn IOutcomeSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn add_sink(&mut self, sink: Arc<dyn IOutcomeSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Normalize, apply to `store`, then notify sinks.
    ///
    /// The state update is committed before any sink runs. A failing sink is
    /// logged and skipped; it does not affect the store or later sinks.
    pub fn process(
        &self,
        terminal: &TerminalState,
        definition: &CueDefinition,
        store: &mut UserStateStore,
        timestamp: DateTime<Utc>,
    ) -> CueOutcome {
        let span = normalize_span!(terminal.cue_id, terminal.outcome_kind);
        let _guard = span.enter();

        let outcome = normalize(terminal, definition, timestamp);
        let applied = apply(outcome, store).clone();
        tracing::debug!(
            outcome_id = %applied.outcome_id(),
            tags = applied.tags_reinforced().len(),
            engaged_ms = ?terminal.engaged_ms(),
            "outcome applied"
        );

        for sink in &self.sinks {
            if let Err(e) = sink.on_outcome(&applied) {
                tracing::warn!(sink = sink.name(), error = %e, "outcome sink failed");
            }
        }
        applied
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("Normalizer").field("sinks", &names).finish()
    }
}

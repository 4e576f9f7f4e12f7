//! CueSession: one user's select → present → normalize → apply loop.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use navicue_catalog::Catalog;
use navicue_core::config::LifecycleConfig;
use navicue_core::errors::{LifecycleError, NavicueError, NavicueResult};
use navicue_core::{CueOutcome, NavicueConfig, UserContext};
use navicue_lifecycle::{InputAck, InputEvent, LifecycleController, ScheduledTransition};
use navicue_normalizer::Normalizer;
use navicue_selection::{SelectionStrategy, Selector};
use navicue_state::{StateSnapshot, UserStateStore};

use crate::analytics::SessionAnalytics;

/// A user's session: state, catalog, engines, and at most one live presentation.
pub struct CueSession {
    session_id: String,
    catalog: Arc<Catalog>,
    store: UserStateStore,
    strategy: Arc<dyn SelectionStrategy>,
    normalizer: Normalizer,
    lifecycle: LifecycleConfig,
    active: Option<LifecycleController>,
    analytics: SessionAnalytics,
    created_at: DateTime<Utc>,
}

impl CueSession {
    pub fn new(
        session_id: impl Into<String>,
        context: UserContext,
        catalog: Arc<Catalog>,
        config: &NavicueConfig,
    ) -> Self {
        let store = UserStateStore::new(context, config.state.clone());
        Self::with_store(session_id, store, catalog, config)
    }

    /// Resume from persisted state.
    pub fn restore(
        session_id: impl Into<String>,
        snapshot: StateSnapshot,
        catalog: Arc<Catalog>,
        config: &NavicueConfig,
    ) -> Self {
        let store = UserStateStore::restore(snapshot, config.state.clone());
        Self::with_store(session_id, store, catalog, config)
    }

    fn with_store(
        session_id: impl Into<String>,
        store: UserStateStore,
        catalog: Arc<Catalog>,
        config: &NavicueConfig,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            catalog,
            store,
            strategy: Arc::new(Selector::new(config.selection.clone())),
            normalizer: Normalizer::new(),
            lifecycle: config.lifecycle.clone(),
            active: None,
            analytics: SessionAnalytics::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn SelectionStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    // ── Presentation ────────────────────────────────────────────────────

    /// Select the next cue and start its lifecycle at `now`.
    ///
    /// A presentation still in flight is torn down first and produces no
    /// outcome. If selection fails the session is left with nothing active.
    pub fn present_next(&mut self, now: u64) -> NavicueResult<&LifecycleController> {
        self.teardown();

        let cue = self
            .strategy
            .select_next(self.store.context(), self.store.mindblock(), &self.catalog)?
            .clone();
        tracing::debug!(session_id = %self.session_id, cue_id = %cue.id, "presenting cue");

        self.analytics.record_presented(cue.response_kind);
        let mut controller =
            LifecycleController::new(cue, &self.lifecycle, self.store.context().pacing);
        controller.start(now)?;
        Ok(self.active.insert(controller))
    }

    /// Forward renderer input to the live presentation.
    ///
    /// Returns the outcome if this input finished the presentation. Validation
    /// failures leave the presentation active and are returned as
    /// `InvalidResponse`.
    pub fn handle(&mut self, event: InputEvent, now: u64) -> NavicueResult<Option<CueOutcome>> {
        let Some(controller) = self.active.as_mut() else {
            tracing::debug!(session_id = %self.session_id, "input with nothing presented");
            return Ok(None);
        };
        match controller.handle(event, now) {
            Ok(InputAck::Accepted) => Ok(self.collect()),
            Ok(InputAck::Ignored) => Ok(None),
            Err(e) => {
                self.analytics.record_rejection();
                tracing::debug!(session_id = %self.session_id, error = %e, "input rejected");
                Err(NavicueError::InvalidResponse(e))
            }
        }
    }

    /// Advance the live presentation's clock.
    pub fn tick(&mut self, now: u64) -> Option<CueOutcome> {
        let fired = self.active.as_mut()?.tick(now);
        if fired == 0 {
            return None;
        }
        self.collect()
    }

    /// Run the callback a host timer was armed with.
    ///
    /// A stale generation is already logged by the controller and is dropped
    /// here, so a host timer losing a race against user input is not an error.
    pub fn fire(&mut self, generation: u64, now: u64) -> NavicueResult<Option<CueOutcome>> {
        let Some(controller) = self.active.as_mut() else {
            return Ok(None);
        };
        match controller.fire(generation, now) {
            Ok(()) => Ok(self.collect()),
            Err(LifecycleError::StaleTransition { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Normalize and apply the live presentation's terminal state, if ready.
    fn collect(&mut self) -> Option<CueOutcome> {
        let controller = self.active.as_mut()?;
        let terminal = controller.take_terminal()?;
        let outcome =
            self.normalizer
                .process(&terminal, controller.cue(), &mut self.store, Utc::now());
        self.analytics.record_outcome(&outcome, terminal.engaged_ms());
        tracing::info!(
            session_id = %self.session_id,
            cue_id = %outcome.cue_id(),
            outcome = %outcome.outcome_kind(),
            "presentation finished"
        );
        Some(outcome)
    }

    /// Tear down the live presentation without producing an outcome.
    pub fn teardown(&mut self) {
        if let Some(mut controller) = self.active.take() {
            if !controller.is_finished() {
                self.analytics.record_abandoned();
                tracing::debug!(
                    session_id = %self.session_id,
                    cue_id = %controller.cue().id,
                    stage = %controller.current_stage(),
                    "presentation abandoned"
                );
            }
            controller.cancel();
        }
    }

    /// Close the session and hand its state to the persistence layer.
    pub fn end(mut self) -> StateSnapshot {
        self.teardown();
        tracing::info!(
            session_id = %self.session_id,
            presented = self.analytics.presented,
            completion_rate = self.analytics.completion_rate(),
            "session ended"
        );
        self.store.into_snapshot()
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn active(&self) -> Option<&LifecycleController> {
        self.active.as_ref()
    }

    /// The callback the host should arm a timer for.
    pub fn next_deadline(&self) -> Option<ScheduledTransition> {
        self.active.as_ref().and_then(|c| c.next_deadline())
    }

    pub fn store(&self) -> &UserStateStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn analytics(&self) -> &SessionAnalytics {
        &self.analytics
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Debug for CueSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CueSession")
            .field("session_id", &self.session_id)
            .field("active", &self.active.as_ref().map(|c| c.cue().id.as_str()))
            .field("presented", &self.analytics.presented)
            .finish()
    }
}

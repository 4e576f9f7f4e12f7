//! LifecycleController: the shared stage machine every cue screen runs on.

use serde::Serialize;

use navicue_core::config::LifecycleConfig;
use navicue_core::errors::{LifecycleError, ResponseError};
use navicue_core::{
    CueDefinition, LifecycleStage, OutcomeKind, Pacing, RawInput, TerminalState,
};
use navicue_observability::lifecycle_span;

use crate::input::{InputAck, InputEvent};
use crate::response::{Effect, ResponseState};
use crate::scheduler::{ScheduledTransition, Scheduler, TimerAction};
use crate::timing::ResolvedTiming;

/// Renderer-facing view of a presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifecycleState {
    pub cue_id: String,
    pub stage: LifecycleStage,
    pub entered_at: u64,
    pub raw_input: RawInput,
}

/// Stage machine for one presented cue.
#[derive(Debug)]
pub struct LifecycleController {
    cue: CueDefinition,
    timing: ResolvedTiming,
    stage: LifecycleStage,
    entered_at: u64,
    active_entered_at: Option<u64>,
    started: bool,
    destroyed: bool,
    scheduler: Scheduler,
    response: ResponseState,
    /// Set when the interaction is decided; `active` may then be left.
    outcome: Option<(OutcomeKind, RawInput)>,
    terminal: Option<TerminalState>,
    transitions: u64,
}

impl LifecycleController {
    /// Create a controller for one presentation. Nothing runs until `start`.
    pub fn new(cue: CueDefinition, config: &LifecycleConfig, pacing: Pacing) -> Self {
        let timing = ResolvedTiming::resolve(&cue, config, pacing);
        let response = ResponseState::for_kind(cue.response_kind);
        Self {
            cue,
            timing,
            stage: LifecycleStage::Arriving,
            entered_at: 0,
            active_entered_at: None,
            started: false,
            destroyed: false,
            scheduler: Scheduler::new(),
            response,
            outcome: None,
            terminal: None,
            transitions: 0,
        }
    }

    /// Enter `arriving` and arm its automatic advance.
    pub fn start(&mut self, now: u64) -> Result<(), LifecycleError> {
        if self.destroyed {
            return Err(LifecycleError::Destroyed {
                cue_id: self.cue.id.clone(),
            });
        }
        if self.started {
            return Err(LifecycleError::AlreadyStarted {
                cue_id: self.cue.id.clone(),
            });
        }
        self.started = true;
        self.entered_at = now;
        self.scheduler.schedule(
            now.saturating_add(self.timing.arriving_ms),
            TimerAction::Advance(LifecycleStage::Arriving),
        );
        tracing::debug!(cue_id = %self.cue.id, response_kind = %self.cue.response_kind, "lifecycle started");
        Ok(())
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Leave `expected` for the next stage.
    ///
    /// Shared by timers and user actions. Returns `false` without effect when
    /// the controller is no longer in `expected`, so a duplicate call for the
    /// same stage produces exactly one transition.
    pub fn advance(&mut self, expected: LifecycleStage, now: u64) -> bool {
        if self.destroyed || !self.started || self.stage != expected {
            return false;
        }
        let next = match self.stage {
            LifecycleStage::Arriving if self.cue.has_framing => LifecycleStage::Present,
            LifecycleStage::Arriving | LifecycleStage::Present => LifecycleStage::Active,
            LifecycleStage::Active => match &self.outcome {
                Some((OutcomeKind::Completed, _)) => LifecycleStage::Resonant,
                Some(_) => LifecycleStage::Afterglow,
                None => return false,
            },
            LifecycleStage::Resonant => LifecycleStage::Afterglow,
            LifecycleStage::Afterglow => return false,
        };
        self.enter(next, now);
        true
    }

    fn enter(&mut self, stage: LifecycleStage, now: u64) {
        self.scheduler.cancel();
        let from = self.stage;
        self.stage = stage;
        self.entered_at = now;
        self.transitions += 1;

        let span = lifecycle_span!(self.cue.id, self.cue.response_kind);
        let _guard = span.enter();
        tracing::debug!(from = %from, to = %stage, at = now, "stage transition");

        match stage {
            LifecycleStage::Arriving => {}
            LifecycleStage::Present => {
                self.scheduler.schedule(
                    now.saturating_add(self.timing.present_ms),
                    TimerAction::Advance(LifecycleStage::Present),
                );
            }
            LifecycleStage::Active => {
                self.active_entered_at = Some(now);
                let effect = self.response.on_enter(&self.timing);
                self.apply(effect, now);
            }
            LifecycleStage::Resonant => {
                self.scheduler.schedule(
                    now.saturating_add(self.timing.resonant_ms),
                    TimerAction::Advance(LifecycleStage::Resonant),
                );
            }
            LifecycleStage::Afterglow => self.finish(now),
        }
    }

    fn apply(&mut self, effect: Effect, now: u64) -> InputAck {
        match effect {
            Effect::Ignored => InputAck::Ignored,
            Effect::Accepted => InputAck::Accepted,
            Effect::Schedule { delay_ms, action } => {
                self.scheduler.schedule(now.saturating_add(delay_ms), action);
                InputAck::Accepted
            }
            Effect::CancelTimer => {
                self.scheduler.cancel();
                InputAck::Accepted
            }
            Effect::Complete => {
                let raw = self.response.raw_input();
                self.conclude(OutcomeKind::Completed, raw, now);
                InputAck::Accepted
            }
        }
    }

    fn conclude(&mut self, kind: OutcomeKind, raw: RawInput, now: u64) {
        self.outcome = Some((kind, raw));
        self.advance(LifecycleStage::Active, now);
    }

    fn finish(&mut self, now: u64) {
        let Some((outcome_kind, raw)) = self.outcome.clone() else {
            return;
        };
        tracing::info!(cue_id = %self.cue.id, outcome = %outcome_kind, "lifecycle finished");
        self.terminal = Some(TerminalState {
            cue_id: self.cue.id.clone(),
            response_kind: self.cue.response_kind,
            outcome_kind,
            raw,
            generation: self.scheduler.generation(),
            active_entered_at: self.active_entered_at,
            ended_at: now,
        });
    }

    // ── Time ────────────────────────────────────────────────────────────

    /// Fire every callback due at `now`, cascading through zero-length stages.
    /// Returns the number of callbacks fired.
    pub fn tick(&mut self, now: u64) -> usize {
        if self.destroyed {
            return 0;
        }
        let mut fired = 0;
        while let Some(transition) = self.scheduler.take_due(now) {
            // Run at the deadline so cascades keep accurate timestamps.
            self.run(transition.action, transition.due_at);
            fired += 1;
        }
        fired
    }

    /// Fire the callback a host timer was armed with.
    ///
    /// A generation that is no longer current, or a torn-down controller,
    /// yields `StaleTransition`; the caller logs and drops it.
    pub fn fire(&mut self, generation: u64, now: u64) -> Result<(), LifecycleError> {
        let current = self.scheduler.generation();
        let transition = if self.destroyed {
            None
        } else {
            self.scheduler.take_generation(generation)
        };
        match transition {
            Some(t) => {
                self.run(t.action, now);
                Ok(())
            }
            None => {
                tracing::warn!(
                    cue_id = %self.cue.id,
                    generation,
                    current,
                    destroyed = self.destroyed,
                    "stale transition dropped"
                );
                Err(LifecycleError::StaleTransition {
                    cue_id: self.cue.id.clone(),
                    generation,
                    current,
                })
            }
        }
    }

    fn run(&mut self, action: TimerAction, now: u64) {
        match action {
            TimerAction::Advance(stage) => {
                self.advance(stage, now);
            }
            TimerAction::SelectConfirm | TimerAction::HoldComplete | TimerAction::TimerElapsed => {
                if self.stage == LifecycleStage::Active && self.outcome.is_none() {
                    let effect = self.response.on_timer(action);
                    self.apply(effect, now);
                }
            }
        }
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Handle one renderer input.
    ///
    /// Input outside `active` is ignored, never queued. Validation failures
    /// are returned and leave the controller in `active` with nothing changed.
    pub fn handle(&mut self, event: InputEvent, now: u64) -> Result<InputAck, ResponseError> {
        if self.destroyed {
            tracing::warn!(cue_id = %self.cue.id, event = ?event, "input on torn-down controller dropped");
            return Ok(InputAck::Ignored);
        }
        if !self.stage.accepts_input() || self.outcome.is_some() || self.response.is_final() {
            tracing::debug!(cue_id = %self.cue.id, stage = %self.stage, event = ?event, "input ignored");
            return Ok(InputAck::Ignored);
        }

        match event {
            InputEvent::Defer => {
                if !self.cue.response_kind.accepts_deferral() {
                    return Err(ResponseError::DeferralNotAllowed {
                        cue_id: self.cue.id.clone(),
                    });
                }
                self.conclude(OutcomeKind::Deferred, RawInput::Nothing, now);
                Ok(InputAck::Accepted)
            }
            InputEvent::Skip => {
                self.conclude(OutcomeKind::Skipped, RawInput::Nothing, now);
                Ok(InputAck::Accepted)
            }
            event => {
                let effect = self.response.handle(event, &self.cue, &self.timing, now)?;
                Ok(self.apply(effect, now))
            }
        }
    }

    // ── Teardown ────────────────────────────────────────────────────────

    /// Tear the presentation down: cancel the live callback and discard any
    /// pending hand-off. Every later call is a no-op.
    pub fn cancel(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        if let Some(pending) = self.scheduler.cancel() {
            tracing::debug!(cue_id = %self.cue.id, action = ?pending.action, "pending callback cancelled");
        }
        self.terminal = None;
    }

    /// The terminal hand-off, yielded exactly once after `afterglow` is entered.
    pub fn take_terminal(&mut self) -> Option<TerminalState> {
        if self.destroyed {
            return None;
        }
        self.terminal.take()
    }

    // ── Renderer boundary ───────────────────────────────────────────────

    /// The cue being presented.
    pub fn cue(&self) -> &CueDefinition {
        &self.cue
    }

    /// Current lifecycle stage.
    pub fn current_stage(&self) -> LifecycleStage {
        self.stage
    }

    /// Clock value at which the current stage was entered.
    pub fn entered_at(&self) -> u64 {
        self.entered_at
    }

    /// Stage delays after cue overrides and pacing.
    pub fn timing(&self) -> &ResolvedTiming {
        &self.timing
    }

    /// Whether `start` has been called.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether `cancel` has torn the controller down.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Whether `afterglow` has been reached.
    pub fn is_finished(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Number of stage transitions since `start`.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// The live callback a host timer should be armed with.
    pub fn next_deadline(&self) -> Option<ScheduledTransition> {
        if self.destroyed {
            return None;
        }
        self.scheduler.pending().copied()
    }

    /// Typed text of a text cue.
    pub fn text_buffer(&self) -> Option<&str> {
        match &self.response {
            ResponseState::Text { buffer } => Some(buffer.as_str()),
            _ => None,
        }
    }

    /// Pending multiselect set, in toggle order.
    pub fn pending_selection(&self) -> Option<&[String]> {
        match &self.response {
            ResponseState::Multiselect { pending } => Some(pending.as_slice()),
            _ => None,
        }
    }

    /// The chosen option of a select cue.
    pub fn chosen(&self) -> Option<&str> {
        match &self.response {
            ResponseState::Select { chosen } => chosen.as_deref(),
            _ => None,
        }
    }

    /// Hold progress at `now`, in [0.0, 1.0].
    pub fn hold_progress(&self, now: u64) -> f64 {
        self.response.hold_progress(&self.timing, now)
    }

    /// Whether a timer cue's duration has elapsed.
    pub fn timer_elapsed(&self) -> bool {
        matches!(self.response, ResponseState::Timer { elapsed: true })
    }

    /// Whether a submit would currently be accepted.
    pub fn can_submit(&self) -> bool {
        self.stage.accepts_input() && self.outcome.is_none() && self.response.can_submit(&self.cue)
    }

    /// How the interaction ended, once decided.
    pub fn outcome_kind(&self) -> Option<OutcomeKind> {
        self.outcome.as_ref().map(|(kind, _)| *kind)
    }

    /// Snapshot for the renderer.
    pub fn state(&self) -> LifecycleState {
        let raw_input = match &self.outcome {
            Some((_, raw)) => raw.clone(),
            None => self.response.raw_input(),
        };
        LifecycleState {
            cue_id: self.cue.id.clone(),
            stage: self.stage,
            entered_at: self.entered_at,
            raw_input,
        }
    }
}

//! Per-kind response state while `active`.
//!
//! Each response kind is one variant of `ResponseState`; the controller owns
//! the stage machine and timers, this module decides what an input means.

use navicue_core::errors::ResponseError;
use navicue_core::{CueDefinition, RawInput, ResponseKind};

use crate::input::InputEvent;
use crate::scheduler::TimerAction;
use crate::timing::ResolvedTiming;

/// What the controller should do after a response-level event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Effect {
    Ignored,
    Accepted,
    /// Accepted, and (re)arm the live timer.
    Schedule { delay_ms: u64, action: TimerAction },
    /// Accepted, and drop the live timer.
    CancelTimer,
    /// The response is complete; leave `active`.
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResponseState {
    Text { buffer: String },
    Select { chosen: Option<String> },
    Multiselect { pending: Vec<String> },
    Hold { pressed_at: Option<u64> },
    Timer { elapsed: bool },
    SitWithIt,
    None,
}

impl ResponseState {
    pub(crate) fn for_kind(kind: ResponseKind) -> Self {
        match kind {
            ResponseKind::Text => Self::Text {
                buffer: String::new(),
            },
            ResponseKind::Select => Self::Select { chosen: None },
            ResponseKind::Multiselect => Self::Multiselect {
                pending: Vec::new(),
            },
            ResponseKind::Hold => Self::Hold { pressed_at: None },
            ResponseKind::Timer => Self::Timer { elapsed: false },
            ResponseKind::SitWithIt => Self::SitWithIt,
            ResponseKind::None => Self::None,
        }
    }

    /// Effect of entering `active`.
    pub(crate) fn on_enter(&self, timing: &ResolvedTiming) -> Effect {
        match self {
            Self::Timer { .. } | Self::SitWithIt => Effect::Schedule {
                delay_ms: timing.duration_ms,
                action: TimerAction::TimerElapsed,
            },
            Self::None => Effect::Complete,
            _ => Effect::Accepted,
        }
    }

    /// A single-select choice is final once made.
    pub(crate) fn is_final(&self) -> bool {
        matches!(self, Self::Select { chosen: Some(_) })
    }

    /// Handle one user input. Inputs that do not apply to this kind are ignored.
    pub(crate) fn handle(
        &mut self,
        event: InputEvent,
        cue: &CueDefinition,
        timing: &ResolvedTiming,
        now: u64,
    ) -> Result<Effect, ResponseError> {
        match (self, event) {
            (Self::Text { buffer }, InputEvent::TypeText(text)) => {
                buffer.push_str(&text);
                Ok(Effect::Accepted)
            }
            (Self::Text { buffer }, InputEvent::Backspace) => {
                buffer.pop();
                Ok(Effect::Accepted)
            }
            (Self::Text { buffer }, InputEvent::Submit) => {
                let length = buffer.trim().chars().count();
                let min = min_length(cue);
                if length < min {
                    return Err(ResponseError::BelowMinLength {
                        cue_id: cue.id.clone(),
                        length,
                        min,
                    });
                }
                Ok(Effect::Complete)
            }

            (Self::Select { chosen }, InputEvent::Choose(value)) => {
                if chosen.is_some() {
                    return Ok(Effect::Ignored);
                }
                known_option(cue, &value)?;
                *chosen = Some(value);
                Ok(Effect::Schedule {
                    delay_ms: timing.select_confirm_ms,
                    action: TimerAction::SelectConfirm,
                })
            }

            (Self::Multiselect { pending }, InputEvent::Toggle(value)) => {
                known_option(cue, &value)?;
                if let Some(i) = pending.iter().position(|v| *v == value) {
                    pending.remove(i);
                } else {
                    pending.push(value);
                }
                Ok(Effect::Accepted)
            }
            (Self::Multiselect { pending }, InputEvent::Submit) => {
                if pending.is_empty() {
                    return Err(ResponseError::EmptySelection {
                        cue_id: cue.id.clone(),
                    });
                }
                Ok(Effect::Complete)
            }

            (Self::Hold { pressed_at }, InputEvent::Press) => {
                if pressed_at.is_some() {
                    return Ok(Effect::Ignored);
                }
                *pressed_at = Some(now);
                Ok(Effect::Schedule {
                    delay_ms: timing.hold_target_ms,
                    action: TimerAction::HoldComplete,
                })
            }
            (Self::Hold { pressed_at }, InputEvent::Release) => match pressed_at.take() {
                None => Ok(Effect::Ignored),
                Some(start) if now.saturating_sub(start) >= timing.hold_target_ms => {
                    Ok(Effect::Complete)
                }
                // Early release: progress resets, no partial credit.
                Some(_) => Ok(Effect::CancelTimer),
            },

            (Self::Timer { elapsed }, InputEvent::Continue) => {
                if *elapsed {
                    Ok(Effect::Complete)
                } else {
                    Err(ResponseError::NotReady {
                        cue_id: cue.id.clone(),
                        reason: "timer has not finished".to_string(),
                    })
                }
            }

            _ => Ok(Effect::Ignored),
        }
    }

    /// Effect of a scheduled callback firing while `active`.
    pub(crate) fn on_timer(&mut self, action: TimerAction) -> Effect {
        match (self, action) {
            (Self::Select { chosen: Some(_) }, TimerAction::SelectConfirm) => Effect::Complete,
            (Self::Hold { pressed_at }, TimerAction::HoldComplete) if pressed_at.is_some() => {
                Effect::Complete
            }
            (Self::Timer { elapsed }, TimerAction::TimerElapsed) => {
                *elapsed = true;
                Effect::Accepted
            }
            (Self::SitWithIt, TimerAction::TimerElapsed) => Effect::Complete,
            _ => Effect::Ignored,
        }
    }

    /// Captured payload on completion.
    pub(crate) fn raw_input(&self) -> RawInput {
        match self {
            Self::Text { buffer } => RawInput::Text(buffer.clone()),
            Self::Select { chosen } => {
                RawInput::Selected(chosen.iter().cloned().collect())
            }
            Self::Multiselect { pending } => RawInput::Selected(pending.clone()),
            Self::Hold { .. } | Self::Timer { .. } | Self::SitWithIt => RawInput::Completed,
            Self::None => RawInput::Nothing,
        }
    }

    /// Whether a submit would currently be accepted.
    pub(crate) fn can_submit(&self, cue: &CueDefinition) -> bool {
        match self {
            Self::Text { buffer } => buffer.trim().chars().count() >= min_length(cue),
            Self::Multiselect { pending } => !pending.is_empty(),
            Self::Timer { elapsed } => *elapsed,
            _ => false,
        }
    }

    /// Hold progress in [0.0, 1.0].
    pub(crate) fn hold_progress(&self, timing: &ResolvedTiming, now: u64) -> f64 {
        match self {
            Self::Hold {
                pressed_at: Some(start),
            } => (now.saturating_sub(*start) as f64 / timing.hold_target_ms as f64).min(1.0),
            _ => 0.0,
        }
    }
}

fn min_length(cue: &CueDefinition) -> usize {
    cue.min_response_length
        .unwrap_or(navicue_core::constants::DEFAULT_MIN_RESPONSE_LENGTH)
}

fn known_option(cue: &CueDefinition, value: &str) -> Result<(), ResponseError> {
    if cue.option(value).is_some() {
        Ok(())
    } else {
        Err(ResponseError::UnknownOption {
            cue_id: cue.id.clone(),
            value: value.to_string(),
        })
    }
}

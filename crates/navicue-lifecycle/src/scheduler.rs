//! Single-slot scheduler. At most one callback is live per controller;
//! scheduling or cancelling bumps the generation so a host timer carrying an
//! older generation is recognized as stale.

use navicue_core::LifecycleStage;

/// What a scheduled callback does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Automatic advance out of the given stage.
    Advance(LifecycleStage),
    /// A single-select choice finished its confirm delay.
    SelectConfirm,
    /// A hold reached its target duration.
    HoldComplete,
    /// A timer or sit-with-it duration elapsed.
    TimerElapsed,
}

/// The live callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub due_at: u64,
    pub action: TimerAction,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    slot: Option<ScheduledTransition>,
    generation: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending callback. Returns the new generation.
    pub fn schedule(&mut self, due_at: u64, action: TimerAction) -> u64 {
        self.generation += 1;
        self.slot = Some(ScheduledTransition {
            due_at,
            action,
            generation: self.generation,
        });
        self.generation
    }

    /// Drop the pending callback, if any, and invalidate its generation.
    pub fn cancel(&mut self) -> Option<ScheduledTransition> {
        self.generation += 1;
        self.slot.take()
    }

    /// Take the pending callback if it is due at `now`.
    pub fn take_due(&mut self, now: u64) -> Option<ScheduledTransition> {
        match self.slot {
            Some(t) if t.due_at <= now => self.slot.take(),
            _ => None,
        }
    }

    /// Take the pending callback if `generation` is still current.
    pub fn take_generation(&mut self, generation: u64) -> Option<ScheduledTransition> {
        match self.slot {
            Some(t) if t.generation == generation => self.slot.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&ScheduledTransition> {
        self.slot.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_replaces_the_previous_callback() {
        let mut s = Scheduler::new();
        let first = s.schedule(100, TimerAction::TimerElapsed);
        let second = s.schedule(200, TimerAction::HoldComplete);
        assert_ne!(first, second);
        assert!(s.take_generation(first).is_none());
        assert_eq!(s.pending().map(|t| t.action), Some(TimerAction::HoldComplete));
    }

    #[test]
    fn take_due_respects_deadline() {
        let mut s = Scheduler::new();
        s.schedule(100, TimerAction::TimerElapsed);
        assert!(s.take_due(99).is_none());
        assert!(s.take_due(100).is_some());
        assert!(s.take_due(1_000).is_none());
    }

    #[test]
    fn cancel_invalidates_generation() {
        let mut s = Scheduler::new();
        let generation = s.schedule(100, TimerAction::TimerElapsed);
        assert!(s.cancel().is_some());
        assert!(s.generation() > generation);
        assert!(s.pending().is_none());
    }
}

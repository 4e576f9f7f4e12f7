//! # navicue-lifecycle
//!
//! One `LifecycleController` per presented cue. It sequences the cue through
//! `arriving → present → active → resonant → afterglow`, accepts input only
//! while `active`, and hands a `TerminalState` to the normalizer exactly once.
//!
//! Time is driven by the host: it passes a monotonic millisecond clock to
//! `start`, `tick`, `fire`, and `handle`. The controller keeps at most one
//! scheduled callback alive, and every stage change invalidates the previous one.

mod controller;
mod input;
mod response;
mod scheduler;
mod timing;

pub use controller::{LifecycleController, LifecycleState};
pub use input::{InputAck, InputEvent};
pub use scheduler::{ScheduledTransition, Scheduler, TimerAction};
pub use timing::ResolvedTiming;

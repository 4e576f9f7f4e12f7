//! # navicue-selection
//!
//! Picks the next cue from the catalog given the user's context and mindblock
//! state. Selection is a pure function of its inputs: it never mutates the
//! mindblock, and any randomness comes from an explicit seed.

mod engine;
mod jitter;
mod pool;
mod scorer;

pub use engine::{select_next, Selection, SelectionStrategy, Selector};
pub use jitter::SeededJitter;
pub use pool::Relaxation;
pub use scorer::{ScoreBreakdown, ScoredCue};

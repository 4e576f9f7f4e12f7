//! # navicue-normalizer
//!
//! Converts a controller's `TerminalState` into a `CueOutcome` with a payload
//! shape that does not depend on the response kind, then applies it to the
//! user's state and notifies registered outcome sinks.

mod normalize;
mod normalizer;

pub use normalize::{apply, normalize};
pub use normalizer::Normalizer;

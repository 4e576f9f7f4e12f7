//! # navicue-core
//!
//! Foundation crate for the NaviCue engine.
//! Defines the cue data model, errors, config, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod cue;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NavicueConfig;
pub use cue::{CueContainer, CueDefinition, CueFormat, CueOption, CueTiming, ResponseKind};
pub use errors::{NavicueError, NavicueResult};
pub use models::{
    CueOutcome, LifecycleStage, OutcomeKind, OutcomePayload, Pacing, RawInput, TerminalState,
    Tone, UserContext,
};

mod outcome;
mod stage;
mod terminal;
mod user_context;

pub use outcome::{CueOutcome, OutcomeKind, OutcomePayload};
pub use stage::LifecycleStage;
pub use terminal::{RawInput, TerminalState};
pub use user_context::{Pacing, Tone, UserContext};

use crate::errors::NavicueResult;
use crate::models::CueOutcome;

/// Receiver of normalized outcomes (analytics feed, persistence, tests).
///
/// Sinks observe outcomes after they have been applied to the user state;
/// a failing sink never rolls the state back.
pub trait IOutcomeSink: Send + Sync {
    /// Sink name used in logs and errors.
    fn name(&self) -> &str;

    /// Receive one applied outcome.
    fn on_outcome(&self, outcome: &CueOutcome) -> NavicueResult<()>;
}

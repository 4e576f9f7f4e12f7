/// Interaction lifecycle errors.
///
/// None of these reach the user: they are logged and dropped by the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifecycleError {
    #[error("stale transition for cue {cue_id}: generation {generation} is no longer current ({current})")]
    StaleTransition {
        cue_id: String,
        generation: u64,
        current: u64,
    },

    #[error("lifecycle for cue {cue_id} already started")]
    AlreadyStarted { cue_id: String },

    #[error("lifecycle for cue {cue_id} was torn down")]
    Destroyed { cue_id: String },
}

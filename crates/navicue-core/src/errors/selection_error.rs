/// Selection errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// The candidate pool was empty even after relaxing the recency exclusion.
    #[error("no candidate cue available: {reason}")]
    NoCandidate { reason: String },
}

/// Rejected user submissions.
///
/// Every variant is recoverable: the submission is dropped, the lifecycle stays
/// `active`, and no state is mutated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseError {
    #[error("cue {cue_id}: response length {length} is below minimum {min}")]
    BelowMinLength {
        cue_id: String,
        length: usize,
        min: usize,
    },

    #[error("cue {cue_id}: unknown option value {value}")]
    UnknownOption { cue_id: String, value: String },

    #[error("cue {cue_id}: nothing selected")]
    EmptySelection { cue_id: String },

    #[error("cue {cue_id}: not ready: {reason}")]
    NotReady { cue_id: String, reason: String },

    #[error("cue {cue_id}: deferral is not allowed for this cue")]
    DeferralNotAllowed { cue_id: String },
}

impl ResponseError {
    /// The cue the rejected submission was aimed at.
    pub fn cue_id(&self) -> &str {
        match self {
            Self::BelowMinLength { cue_id, .. }
            | Self::UnknownOption { cue_id, .. }
            | Self::EmptySelection { cue_id }
            | Self::NotReady { cue_id, .. }
            | Self::DeferralNotAllowed { cue_id } => cue_id,
        }
    }
}

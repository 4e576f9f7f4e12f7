/// Catalog validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("cue id must not be empty")]
    EmptyId,

    #[error("duplicate cue id: {id}")]
    DuplicateId { id: String },

    #[error("cue {cue_id}: response kind {response_kind} {reason}")]
    OptionsMismatch {
        cue_id: String,
        response_kind: String,
        reason: String,
    },

    #[error("cue {cue_id}: duplicate option value {value}")]
    DuplicateOption { cue_id: String, value: String },

    #[error("cue {cue_id}: {count} options exceeds limit {limit}")]
    TooManyOptions {
        cue_id: String,
        count: usize,
        limit: usize,
    },

    #[error("cue {cue_id}: {count} tags exceeds limit {limit}")]
    TooManyTags {
        cue_id: String,
        count: usize,
        limit: usize,
    },

    #[error("cue {cue_id}: min_response_length only applies to text cues")]
    MinLengthOnNonText { cue_id: String },

    #[error("cue {cue_id}: timing {field} {reason}")]
    InvalidTiming {
        cue_id: String,
        field: String,
        reason: String,
    },

    #[error("failed to parse catalog: {reason}")]
    ParseFailed { reason: String },
}

//! Span definitions per operation: selection, lifecycle, normalization.

/// Create a selection span.
#[macro_export]
macro_rules! selection_span {
    ($user_id:expr, $pool_size:expr) => {
        tracing::info_span!("navicue.selection", user_id = %$user_id, pool_size = $pool_size)
    };
}

/// Create a lifecycle span for one presentation.
#[macro_export]
macro_rules! lifecycle_span {
    ($cue_id:expr, $response_kind:expr) => {
        tracing::debug_span!("navicue.lifecycle", cue_id = %$cue_id, response_kind = %$response_kind)
    };
}

/// Create a normalization span.
#[macro_export]
macro_rules! normalize_span {
    ($cue_id:expr, $outcome_kind:expr) => {
        tracing::info_span!("navicue.normalize", cue_id = %$cue_id, outcome = %$outcome_kind)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SELECTION: &str = "navicue.selection";
    pub const LIFECYCLE: &str = "navicue.lifecycle";
    pub const NORMALIZE: &str = "navicue.normalize";
}

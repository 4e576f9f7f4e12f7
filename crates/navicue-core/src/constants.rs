/// NaviCue engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum text length when a cue does not set `min_response_length`.
pub const DEFAULT_MIN_RESPONSE_LENGTH: usize = 0;

/// Maximum number of options a select/multiselect cue may carry.
pub const MAX_OPTIONS_PER_CUE: usize = 32;

/// Maximum number of thematic tags per cue.
pub const MAX_TAGS_PER_CUE: usize = 16;

/// Upper bound for any single stage delay or duration (10 minutes).
pub const MAX_STAGE_DURATION_MS: u64 = 600_000;

//! Default values for every config section.

// Selection weights.
pub const DEFAULT_BASE_WEIGHT: f64 = 1.0;
pub const DEFAULT_PREFERRED_TAG_REWARD: f64 = 1.0;
pub const DEFAULT_DIVERSITY_PENALTY: f64 = 0.5;
pub const DEFAULT_OPEN_LOOP_BONUS: f64 = 0.75;
pub const DEFAULT_LOW_EFFORT_BONUS: f64 = 1.0;
pub const DEFAULT_JITTER: f64 = 0.0;

// Lifecycle timing (milliseconds).
pub const DEFAULT_ARRIVING_MS: u64 = 800;
pub const DEFAULT_PRESENT_MS: u64 = 2_000;
pub const DEFAULT_SELECT_CONFIRM_MS: u64 = 600;
pub const DEFAULT_RESONANT_MS: u64 = 3_000;
pub const DEFAULT_TIMER_MS: u64 = 30_000;
pub const DEFAULT_HOLD_MS: u64 = 3_000;

// Mindblock state.
pub const DEFAULT_RECENT_SHOWN_CAPACITY: usize = 5;
pub const DEFAULT_RECENT_TAG_CAPACITY: usize = 12;
pub const DEFAULT_FATIGUE_RELIEF: f64 = 0.1;
pub const DEFAULT_DEFER_FATIGUE: f64 = 0.1;
pub const DEFAULT_SKIP_FATIGUE: f64 = 0.2;

// Observability.
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TELEMETRY_CAPACITY: usize = 256;

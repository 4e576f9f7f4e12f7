use navicue_core::config::LifecycleConfig;
use navicue_core::{CueDefinition, Pacing};

/// Stage delays for one presentation after applying cue overrides and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTiming {
    pub arriving_ms: u64,
    pub present_ms: u64,
    pub select_confirm_ms: u64,
    pub resonant_ms: u64,
    /// Timer / sit-with-it duration. Content-defined, not paced.
    pub duration_ms: u64,
    /// Hold target. Content-defined, not paced.
    pub hold_target_ms: u64,
}

impl ResolvedTiming {
    pub fn resolve(cue: &CueDefinition, config: &LifecycleConfig, pacing: Pacing) -> Self {
        let timing = &cue.timing;
        Self {
            arriving_ms: pacing.scale(timing.arriving_ms.unwrap_or(config.arriving_ms)),
            present_ms: pacing.scale(timing.present_ms.unwrap_or(config.present_ms)),
            select_confirm_ms: pacing.scale(config.select_confirm_ms),
            resonant_ms: pacing.scale(config.resonant_ms),
            duration_ms: timing.duration_ms.unwrap_or(config.default_timer_ms),
            hold_target_ms: timing
                .hold_target_ms
                .unwrap_or(config.default_hold_ms)
                .max(1),
        }
    }
}

//! Multi-factor candidate weighting.
//!
//! Factors: base weight, preferred-tag reward, recent-tag diversity penalty,
//! open-loop bonus, fatigue-scaled low-effort bonus, seeded jitter.

use navicue_core::config::SelectionConfig;
use navicue_core::{CueDefinition, UserContext};
use navicue_state::MindblockState;

use crate::jitter::SeededJitter;

/// Per-factor contribution to a candidate's weight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub preference: f64,
    /// Stored as a negative contribution.
    pub diversity: f64,
    pub open_loop: f64,
    pub low_effort: f64,
    pub jitter: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.base + self.preference + self.diversity + self.open_loop + self.low_effort + self.jitter
    }
}

/// A candidate with its weight and catalog position.
#[derive(Debug, Clone)]
pub struct ScoredCue<'c> {
    pub cue: &'c CueDefinition,
    /// Catalog position, the tie-break key.
    pub position: usize,
    pub weight: f64,
    pub breakdown: ScoreBreakdown,
}

/// Weight one candidate.
pub(crate) fn score<'c>(
    cue: &'c CueDefinition,
    position: usize,
    context: &UserContext,
    mindblock: &MindblockState,
    config: &SelectionConfig,
    jitter: Option<&SeededJitter>,
) -> ScoredCue<'c> {
    let preferred_overlap = cue.tag_overlap(&context.preferred_tags);

    // Every occurrence in the window counts, so a theme reinforced twice
    // weighs twice as much against the cue.
    let recent_tags = mindblock.recent_tags_reinforced();
    let recent_occurrences: usize = cue.tags.iter().map(|t| recent_tags.count_str(t)).sum();

    let open_loop = if mindblock.is_open_loop(&cue.id) {
        config.open_loop_bonus
    } else {
        0.0
    };

    let low_effort = if cue.response_kind.is_low_effort() {
        mindblock.fatigue() * config.low_effort_bonus
    } else {
        0.0
    };

    let jitter = jitter
        .map(|j| j.offset(mindblock.presentations(), position, config.jitter))
        .unwrap_or(0.0);

    let breakdown = ScoreBreakdown {
        base: config.base_weight,
        preference: config.preferred_tag_reward * preferred_overlap as f64,
        diversity: -(config.diversity_penalty * recent_occurrences as f64),
        open_loop,
        low_effort,
        jitter,
    };

    ScoredCue {
        cue,
        position,
        weight: breakdown.total(),
        breakdown,
    }
}

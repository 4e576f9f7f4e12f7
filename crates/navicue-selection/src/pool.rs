//! Candidate pool with recency exclusion and staged relaxation.

use std::collections::HashSet;

use navicue_core::CueDefinition;
use navicue_state::MindblockState;

/// How far the recency exclusion had to be relaxed to find a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Every recently shown id was excluded.
    None,
    /// Only the newest half of the window stayed excluded.
    OldestHalfReleased,
    /// Every cue in the pool was shown recently; exclusion dropped entirely.
    ExclusionDropped,
}

/// Eligible candidates in pool order, with the relaxation that produced them.
///
/// `pool` is non-empty when called; the result is then non-empty too.
pub(crate) fn eligible<'c>(
    pool: &[&'c CueDefinition],
    mindblock: &MindblockState,
) -> (Vec<&'c CueDefinition>, Relaxation) {
    let recent = mindblock.recently_shown();

    let strict: Vec<&CueDefinition> = pool
        .iter()
        .copied()
        .filter(|cue| !recent.contains_str(&cue.id))
        .collect();
    if !strict.is_empty() {
        return (strict, Relaxation::None);
    }

    // Release the oldest ceil(n/2) entries; keep the newest floor(n/2) excluded.
    let still_excluded: HashSet<&str> = recent
        .newest(recent.len() / 2)
        .map(String::as_str)
        .collect();
    let relaxed: Vec<&CueDefinition> = pool
        .iter()
        .copied()
        .filter(|cue| !still_excluded.contains(cue.id.as_str()))
        .collect();
    if !relaxed.is_empty() {
        return (relaxed, Relaxation::OldestHalfReleased);
    }

    (pool.to_vec(), Relaxation::ExclusionDropped)
}

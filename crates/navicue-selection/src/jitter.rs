//! Seeded jitter. Derived from an explicit seed, the mindblock's presentation
//! count, and the cue's catalog position, so identical inputs always produce
//! identical offsets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Explicit randomness source for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededJitter {
    seed: u64,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Offset in `[0, amplitude)` for one candidate.
    pub fn offset(&self, presentations: u64, position: usize, amplitude: f64) -> f64 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        let mixed = self
            .seed
            .wrapping_add(presentations.wrapping_mul(GOLDEN_GAMMA))
            .wrapping_add((position as u64).wrapping_mul(GOLDEN_GAMMA.rotate_left(17)));
        let mut rng = StdRng::seed_from_u64(mixed);
        rng.random::<f64>() * amplitude
    }
}

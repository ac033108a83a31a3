//! Strategies for choosing between equally scored moves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides whether an equally scored candidate replaces the current best.
pub trait TieBreak {
    /// Return `true` to replace the current best with the new candidate.
    fn prefer_candidate(&mut self) -> bool;
}

/// Keep the first move found among equals. Fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWins;

impl TieBreak for FirstWins {
    #[inline]
    fn prefer_candidate(&mut self) -> bool {
        false
    }
}

/// Replace the current best on a fair coin flip from a seeded generator.
///
/// Two searches started from the same seed make the same choices.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TieBreak for SeededRandom {
    #[inline]
    fn prefer_candidate(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

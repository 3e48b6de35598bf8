//! Computer hit/stand decisions.
//!
//! The rule mixes a score-dependent bias with a uniform roll:
//!
//! ```text
//! k = 100 * (21 - score) / 21 + roll      roll ~ U[0, 100)
//! hit  <=>  k > 50
//! ```
//!
//! A score of 21 or more always stands. The opponent's hand is never consulted.

use crate::scoring::TWENTY_ONE;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Threshold `k` has to exceed for the computer to hit.
pub const HIT_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct ComputerPolicy {
    rng: ChaCha8Rng,
}

impl ComputerPolicy {
    /// Policy backed by OS entropy.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self { rng: ChaCha8Rng::from_seed(seed) }
    }

    /// Deterministic policy for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Pure form of the rule; `roll` is expected in `[0, 100)`.
    ///
    /// ```
    /// use blackjack_rs::policy::ComputerPolicy;
    ///
    /// assert!(ComputerPolicy::decide(10, 0.0));
    /// assert!(!ComputerPolicy::decide(21, 99.9));
    /// ```
    pub fn decide(score: u32, roll: f64) -> bool {
        if score >= TWENTY_ONE {
            return false;
        }
        let bias = 100.0 * f64::from(TWENTY_ONE - score) / f64::from(TWENTY_ONE);
        bias + roll > HIT_THRESHOLD
    }

    /// Probability that [`ComputerPolicy::decide`] hits for a uniform roll.
    pub fn hit_probability(score: u32) -> f64 {
        if score >= TWENTY_ONE {
            return 0.0;
        }
        let bias = 100.0 * f64::from(TWENTY_ONE - score) / f64::from(TWENTY_ONE);
        ((100.0 - (HIT_THRESHOLD - bias)) / 100.0).clamp(0.0, 1.0)
    }

    /// Roll and decide.
    pub fn should_hit(&mut self, score: u32) -> bool {
        let roll: f64 = self.rng.random_range(0.0..100.0);
        let hit = Self::decide(score, roll);
        log::debug!("computer policy: score={score} roll={roll:.2} hit={hit}");
        hit
    }
}

impl Default for ComputerPolicy {
    fn default() -> Self {
        Self::new()
    }
}

//! Deterministic seeded RNG for controller-side stochastic policies.
//!
//! The engine itself is fully deterministic — plan generation and the tick
//! pipeline consume no randomness.  `SimRng` exists for the layer above:
//! random baseline controllers and per-episode seeding in the evaluation
//! harness.  The same seed always produces the same action stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
///
/// Spreads consecutive episode indices uniformly across the seed space so
/// per-episode RNGs never correlate with their siblings.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A seeded RNG owned by one controller or one evaluation episode.
///
/// Intentionally `!Sync` — each thread running an episode must hold its own.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically for episode `episode` of a run with
    /// `root_seed`.  Adding episodes to a run does not disturb the seeds of
    /// earlier episodes, so partial runs reproduce exactly.
    pub fn for_episode(root_seed: u64, episode: u64) -> Self {
        let seed = root_seed ^ episode.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

//! Deterministic RNG for the scaling pipeline.
//!
//! # Determinism strategy
//!
//! All randomness (position jitter, speed noise, type draws, cluster
//! sampling, synthetic segment placement) flows through a single seeded
//! [`ScaleRng`].  For work that may run in parallel — per-segment population
//! generation — a child RNG is derived per segment:
//!
//!   child_seed = parent_draw XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.  A
//! segment's vehicles are therefore identical whether the generation pass
//! runs sequentially or on a thread pool.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG owned by the scaler (or by one generation worker).
///
/// The type is `!Sync` to prevent accidental sharing across threads — each
/// worker must hold its own child instance.
pub struct ScaleRng(SmallRng);

impl ScaleRng {
    pub fn new(seed: u64) -> Self {
        ScaleRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `ScaleRng` from a stable offset (e.g. a segment ID).
    ///
    /// Children with distinct offsets produce independent streams; deriving
    /// the same offset twice from the same parent state yields different
    /// streams because each call advances the parent.
    pub fn child(&mut self, offset: u64) -> ScaleRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        ScaleRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Derive a child without advancing the parent — offset-only mixing.
    ///
    /// Required when many children must be derived reproducibly regardless
    /// of derivation order (the parallel generation pass derives one per
    /// segment).
    pub fn child_fixed(&self, base_seed: u64, offset: u64) -> ScaleRng {
        let child_seed = base_seed ^ offset.wrapping_mul(MIXING_CONSTANT);
        ScaleRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// `amount` distinct indices drawn uniformly from `0..len` without
    /// replacement.  `amount` is clamped to `len`, so a short source simply
    /// yields everything it has.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount.min(len)).into_vec()
    }
}

use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::RandomInt;

/// Uniform random source backed by the xoshiro256** PRNG.
///
/// Seeded sources replay the same sequence, which is what tests rely on when
/// they need a reproducible treap shape.
///
/// # Examples
///
/// ```
/// use forest_random::{RandomInt, UniformRandom};
///
/// let mut a = UniformRandom::with_seed(7);
/// let mut b = UniformRandom::with_seed(7);
/// assert_eq!(a.next_int(), b.next_int());
///
/// let n = a.random_int(1, 10);
/// assert!((1..=10).contains(&n));
/// ```
#[derive(Clone, Debug)]
pub struct UniformRandom {
    seed: u64,
    rng: Xoshiro256StarStar,
}

impl UniformRandom {
    /// Create a source with an optional seed.
    ///
    /// If no seed is provided, one is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// The seed this source was started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random integer in `[min, max]` (inclusive). Bounds are swapped when
    /// given in the wrong order.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }

    /// Random `f64` in `[0, 1)`.
    pub fn random0_1(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomInt for UniformRandom {
    fn next_int(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

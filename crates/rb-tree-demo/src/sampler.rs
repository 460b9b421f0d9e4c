use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seeded source of demo payload values.
///
/// Uses the xoshiro256** PRNG so a run can be replayed from its seed.
///
/// ```
/// use rb_tree_demo::sampler::Sampler;
///
/// let mut sampler = Sampler::new(Some(7));
/// let n = sampler.random_int(1, 10);
/// assert!((1..=10).contains(&n));
/// assert_eq!(sampler.seed(), 7);
/// ```
pub struct Sampler {
    seed: u64,
    rng: Xoshiro256StarStar,
}

impl Sampler {
    /// Create a sampler from `seed`, or from a fresh `OsRng` seed if none is
    /// given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    /// `times` random integers in `[min, max]`.
    pub fn repeat(&mut self, times: usize, min: i32, max: i32) -> Vec<i32> {
        (0..times).map(|_| self.random_int(min, max)).collect()
    }
}

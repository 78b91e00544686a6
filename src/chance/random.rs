use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngExt, SeedableRng};
use rand_distr::StandardNormal;

use super::Chance;

/// [`Chance`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomChance<R = ThreadRng> {
    rng: R,
}

impl RandomChance<ThreadRng> {
    /// Thread-local generator, seeded by the OS.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomChance<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomChance<StdRng> {
    /// Reproducible generator: the same seed types the same way.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomChance<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Chance for RandomChance<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.random()
    }

    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

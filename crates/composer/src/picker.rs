//! Injectable index selection.
//!
//! Choosing an opener and a closer is the only nondeterminism in composition.
//! It goes through [`IndexPicker`] so tests can pin the choice and production
//! can draw fresh randomness per request without any process-wide generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index into a pool of `pool_size` options.
///
/// `pool_size` is always at least one. Implementations should return a value
/// below `pool_size`; larger answers are reduced modulo the pool size by the
/// composer.
pub trait IndexPicker {
    fn pick_index(&mut self, pool_size: usize) -> usize;
}

impl<F> IndexPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick_index(&mut self, pool_size: usize) -> usize {
        self(pool_size)
    }
}

/// Uniform random picker seeded from OS entropy.
///
/// Create one per request; pickers are never shared between requests.
#[derive(Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexPicker for RandomPicker {
    fn pick_index(&mut self, pool_size: usize) -> usize {
        self.rng.gen_range(0..pool_size)
    }
}

/// Reproducible picker: the same seed yields the same sequence of choices.
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick_index(&mut self, pool_size: usize) -> usize {
        self.rng.gen_range(0..pool_size)
    }
}

//! Random selection of candidate cells

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::is_unit_interval;
use crate::error::{MutationError, MutationResult};

/// Picks uniform random subsets without replacement
///
/// Each sampler owns its generator, so separate engines never share random
/// state. Use [`Sampler::seeded`] for reproducible runs.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic sampler
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of elements selected from a pool of `len` at `fraction`
    pub fn selection_size(len: usize, fraction: f64) -> usize {
        ((len as f64 * fraction).ceil() as usize).min(len)
    }

    /// Select `ceil(len * fraction)` distinct candidates
    ///
    /// The pool is shuffled and the first N elements are kept, so the result
    /// order is random too.
    pub fn sample<T>(&mut self, mut candidates: Vec<T>, fraction: f64) -> MutationResult<Vec<T>> {
        if !is_unit_interval(fraction) {
            return Err(MutationError::FractionOutOfRange(fraction));
        }

        let count = Self::selection_size(candidates.len(), fraction);
        candidates.shuffle(&mut self.rng);
        candidates.truncate(count);
        Ok(candidates)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

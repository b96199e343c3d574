//! Random number generator construction.
//!
//! All stochastic operations in this crate take `&mut R where R: Rng`.
//! This module only decides how a generator is created from a seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
///
/// Two generators created with the same seed produce identical streams,
/// so a whole evolution run can be replayed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

//! Seeded random sources.
//!
//! Every run draws from a [`RotationRng`] built from an explicit `u64` seed,
//! so a recorded seed always reproduces the same assignment.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The RNG used throughout the crate.
pub type RotationRng = StdRng;

/// Creates a deterministic RNG from `seed`.
pub fn create_rng(seed: u64) -> RotationRng {
    StdRng::seed_from_u64(seed)
}

/// Returns `seed`, or a fresh one drawn from system entropy.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Shuffles `items` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Removes and returns a uniformly chosen element, keeping the order of the rest.
pub fn pop_random<T, R: Rng + ?Sized>(items: &mut Vec<T>, rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.random_range(0..items.len());
    Some(items.remove(index))
}

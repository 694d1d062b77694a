// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark input generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `length` uniform floats in `[0, 1)`.
///
/// The same seed always yields the same input, so runs are comparable.
pub fn random_floats(length: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..length).map(|_| rng.gen::<f32>()).collect()
}

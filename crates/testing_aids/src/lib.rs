// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! An unpublished crate containing testing utilities for use within this repo.

use std::env;

mod log;
mod macros;

pub use log::*;
pub use macros::panic_message;

/// Whether the tests are running under `cargo mutants`.
#[must_use]
pub fn is_mutation_testing() -> bool {
    env::var("MUTATION_TESTING").as_deref() == Ok("1")
}

/// Standard test data generator - a repeating sequence of bytes from 0 to 255.
pub fn repeating_incrementing_bytes() -> impl Iterator<Item = u8> {
    (0..=u8::MAX).cycle()
}

/// The indices `0..count` in a pseudo-random order that is fully determined by `seed`.
///
/// Used to remove or visit items in "arbitrary" order while keeping test failures reproducible.
#[cfg_attr(test, mutants::skip)] // This is test logic - pointless to mutate.
#[must_use]
pub fn shuffled_indices(count: usize, seed: u64) -> Vec<usize> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut indices = (0..count).collect::<Vec<_>>();
    rng.shuffle(&mut indices);
    indices
}

/// Splits `total` into `parts` positive sizes chosen pseudo-randomly from `seed`.
///
/// # Panics
///
/// Panics if `parts` is zero or greater than `total`.
#[cfg_attr(test, mutants::skip)] // This is test logic - pointless to mutate.
#[must_use]
pub fn random_partition(total: usize, parts: usize, seed: u64) -> Vec<usize> {
    assert!(parts > 0 && parts <= total, "cannot split {total} into {parts} positive parts");

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut cuts = (1..total).collect::<Vec<_>>();
    rng.shuffle(&mut cuts);
    cuts.truncate(parts - 1);
    cuts.sort_unstable();

    let mut sizes = Vec::with_capacity(parts);
    let mut start = 0;
    for cut in cuts.into_iter().chain([total]) {
        sizes.push(cut - start);
        start = cut;
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_reproducible_permutation() {
        let first = shuffled_indices(100, 7);
        let second = shuffled_indices(100, 7);
        assert_eq!(first, second);

        let mut sorted = first;
        sorted.sort_unstable();
        assert!(sorted.into_iter().eq(0..100));
    }

    #[test]
    fn partition_sums_to_total() {
        for seed in 0..10 {
            let sizes = random_partition(50, 7, seed);
            assert_eq!(sizes.len(), 7);
            assert_eq!(sizes.iter().sum::<usize>(), 50);
            assert!(sizes.iter().all(|size| *size > 0));
        }

        assert_eq!(random_partition(3, 3, 0), [1, 1, 1]);
        assert_eq!(random_partition(9, 1, 0), [9]);
    }

    #[test]
    fn incrementing_bytes_wrap() {
        let bytes = repeating_incrementing_bytes().skip(254).take(4).collect::<Vec<_>>();
        assert_eq!(bytes, [254, 255, 0, 1]);
    }
}

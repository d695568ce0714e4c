//! Seeded RNG construction, in-place shuffling, and sampling without
//! replacement.
//!
//! [`shuffle`] is the single mutating operation in the crate; everything
//! else copies. Randomized functions take an explicit `&mut impl Rng`
//! rather than a process-global generator, so callers own reproducibility.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

use crate::error::{Result, SequenceError};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` for high performance. The sequence is deterministic
/// for a given seed on the same platform.
///
/// # Examples
/// ```
/// use vecstats::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely. This mutates the slice; the permuted order is the
/// only observable output.
///
/// # Algorithm
/// Modern variant due to Durstenfeld (1964), popularized by Knuth as
/// "Algorithm P". Iterates backwards, swapping each element with a
/// uniformly chosen earlier (or same) position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use vecstats::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle(&mut v, &mut rng);
/// // v is now a permutation of [1, 2, 3, 4, 5]
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Returns a shuffled index permutation of `[0, n)`.
///
/// Generates a random permutation of indices without modifying any data;
/// [`sample`] is built on it.
///
/// # Complexity
/// Time: O(n), Space: O(n)
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    shuffle(&mut indices, rng);
    indices
}

/// Draws `k` elements without replacement, leaving the source untouched.
///
/// Takes the first `k` entries of a random index permutation, so the
/// output order follows the permutation, not the source order. Element
/// values are preserved; duplicates appear only as often as the source
/// itself duplicates them.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Returns
/// - `Err(TooSmall)` if `k` exceeds the population size.
///
/// # Examples
/// ```
/// use vecstats::random::{create_rng, sample};
/// let pool = vec![10, 20, 30, 40, 50];
/// let mut rng = create_rng(42);
/// let drawn = sample(&pool, 3, &mut rng).unwrap();
/// assert_eq!(drawn.len(), 3);
/// assert!(drawn.iter().all(|v| pool.contains(v)));
/// ```
pub fn sample<T: Clone, R: Rng>(values: &[T], k: usize, rng: &mut R) -> Result<Vec<T>> {
    if k > values.len() {
        return Err(SequenceError::TooSmall {
            requested: k,
            available: values.len(),
        });
    }
    let indices = shuffled_indices(values.len(), rng);
    Ok(indices[..k].iter().map(|&i| values[i].clone()).collect())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    // --- shuffle ---

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut rng = create_rng(123);
        shuffle(&mut v, &mut rng);
        v.sort();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_empty() {
        let mut v: Vec<i32> = vec![];
        let mut rng = create_rng(0);
        shuffle(&mut v, &mut rng); // should not panic
    }

    #[test]
    fn test_shuffle_single() {
        let mut v = vec![42];
        let mut rng = create_rng(0);
        shuffle(&mut v, &mut rng);
        assert_eq!(v, vec![42]);
    }

    #[test]
    fn test_shuffle_actually_shuffles() {
        // With 10 elements, probability of identity permutation is 1/10! ≈ 2.8e-7
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut v = original.clone();
        let mut rng = create_rng(42);
        shuffle(&mut v, &mut rng);
        assert_ne!(v, original, "shuffle should change order (probabilistic)");
    }

    #[test]
    fn test_shuffle_near_uniform_over_permutations() {
        // All 6 permutations of 3 elements should appear with frequency
        // ~1/6 over many trials. Expected count 2000, σ ≈ 41; ±300 is
        // far beyond any plausible statistical fluctuation.
        let mut rng = create_rng(7);
        let mut counts = std::collections::HashMap::new();
        let trials = 12_000;
        for _ in 0..trials {
            let mut v = [0u8, 1, 2];
            shuffle(&mut v, &mut rng);
            *counts.entry(v).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6, "all permutations should occur");
        for (perm, count) in counts {
            assert!(
                (1700..=2300).contains(&count),
                "permutation {perm:?} occurred {count} times"
            );
        }
    }

    #[test]
    fn test_shuffled_indices() {
        let mut rng = create_rng(42);
        let indices = shuffled_indices(10, &mut rng);
        assert_eq!(indices.len(), 10);
        let mut sorted = indices.clone();
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }

    // --- sample ---

    #[test]
    fn test_sample_exact_size() {
        let pool = vec![1, 2, 3, 4, 5];
        let mut rng = create_rng(42);
        let drawn = sample(&pool, 3, &mut rng).unwrap();
        assert_eq!(drawn.len(), 3);
    }

    #[test]
    fn test_sample_without_replacement() {
        // Distinct source: no element may appear twice in the sample.
        let pool: Vec<i32> = (0..20).collect();
        let mut rng = create_rng(99);
        let drawn = sample(&pool, 10, &mut rng).unwrap();
        let mut seen = drawn.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), drawn.len(), "sample drew an element twice");
        assert!(drawn.iter().all(|v| pool.contains(v)));
    }

    #[test]
    fn test_sample_does_not_mutate_source() {
        let pool = vec![5, 4, 3, 2, 1];
        let snapshot = pool.clone();
        let mut rng = create_rng(1);
        sample(&pool, 4, &mut rng).unwrap();
        assert_eq!(pool, snapshot);
    }

    #[test]
    fn test_sample_full_population_is_permutation() {
        let pool = vec![1, 2, 3, 4, 5];
        let mut rng = create_rng(3);
        let mut drawn = sample(&pool, pool.len(), &mut rng).unwrap();
        drawn.sort();
        assert_eq!(drawn, pool);
    }

    #[test]
    fn test_sample_zero_elements() {
        let pool = vec![1, 2, 3];
        let mut rng = create_rng(0);
        assert_eq!(sample(&pool, 0, &mut rng), Ok(vec![]));
    }

    #[test]
    fn test_sample_too_small() {
        let pool = vec![1, 2, 3];
        let mut rng = create_rng(0);
        assert_eq!(
            sample(&pool, 4, &mut rng),
            Err(SequenceError::TooSmall {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_sample_from_empty_with_zero_k() {
        let pool: Vec<i32> = vec![];
        let mut rng = create_rng(0);
        assert_eq!(sample(&pool, 0, &mut rng), Ok(vec![]));
    }
}

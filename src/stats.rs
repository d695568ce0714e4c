//! Extrema, aggregate, and frequency reductions over numeric sequences.
//!
//! All functions are pure: they never mutate the caller's slice (functions
//! that need sorted data, like [`median`], sort a private copy). Element
//! types are generic over the primitive integer and floating-point types
//! via `num-traits` bounds; functions that only need ordering take a bare
//! `PartialOrd`.
//!
//! # Edge-case contract
//!
//! - Reductions undefined on the empty set ([`min`], [`mean`], [`median`],
//!   [`variance`], [`mode`], ...) return [`SequenceError::Empty`].
//! - [`sum`] and [`prod`] are total: the empty sequence yields the additive
//!   or multiplicative identity.
//! - Defined-but-unusual numeric input is never trapped: a zero element in
//!   [`harmonic_mean`] or a non-positive element in [`geo_mean`] follows
//!   IEEE 754 semantics and yields infinity or NaN rather than an error.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Result, SequenceError};

/// Lossy conversion to f64 for mean-family outputs.
///
/// All primitive numeric types convert successfully; the NaN fallback only
/// engages for exotic `ToPrimitive` impls and then propagates per the
/// crate's IEEE-semantics contract.
pub(crate) fn to_f64_lossy<T: ToPrimitive>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// Extrema and index functions
// ---------------------------------------------------------------------------

/// Returns the index of the minimal value.
///
/// Ties resolve to the **first** occurrence: the scan runs left to right
/// from index 0 and only a strictly smaller value displaces the running
/// minimum.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `Err(Empty)` if `values` has no elements.
///
/// # Examples
/// ```
/// use vecstats::stats::argmin;
/// // Duplicate minimum: the first occurrence (index 1) wins.
/// assert_eq!(argmin(&[3, 1, 4, 1]), Ok(1));
/// ```
pub fn argmin<T: PartialOrd>(values: &[T]) -> Result<usize> {
    if values.is_empty() {
        return Err(SequenceError::Empty);
    }
    let mut best = 0;
    for i in 1..values.len() {
        if values[i] < values[best] {
            best = i;
        }
    }
    Ok(best)
}

/// Returns the index of the maximal value.
///
/// Tie-break mirrors [`argmin`]: the first occurrence wins.
///
/// # Returns
/// - `Err(Empty)` if `values` has no elements.
pub fn argmax<T: PartialOrd>(values: &[T]) -> Result<usize> {
    if values.is_empty() {
        return Err(SequenceError::Empty);
    }
    let mut best = 0;
    for i in 1..values.len() {
        if values[i] > values[best] {
            best = i;
        }
    }
    Ok(best)
}

/// Returns the minimal value.
///
/// Defined as the value at [`argmin`]'s index so tie-break semantics are
/// identical; the `Empty` failure propagates unchanged.
///
/// # Examples
/// ```
/// use vecstats::stats::min;
/// assert_eq!(min(&[3, 1, 4, 2]), Ok(1));
/// ```
pub fn min<T: PartialOrd + Copy>(values: &[T]) -> Result<T> {
    Ok(values[argmin(values)?])
}

/// Returns the maximal value.
///
/// Defined as the value at [`argmax`]'s index; propagates `Empty`.
pub fn max<T: PartialOrd + Copy>(values: &[T]) -> Result<T> {
    Ok(values[argmax(values)?])
}

// ---------------------------------------------------------------------------
// Aggregate functions
// ---------------------------------------------------------------------------

/// Sums the sequence in its own element type.
///
/// Total function: the empty sequence yields the additive identity.
///
/// # Examples
/// ```
/// use vecstats::stats::sum;
/// assert_eq!(sum(&[3, 1, 4, 2]), 10);
/// assert_eq!(sum::<i32>(&[]), 0);
/// ```
pub fn sum<T: Copy + Zero>(values: &[T]) -> T {
    values.iter().copied().fold(T::zero(), |acc, v| acc + v)
}

/// Multiplies the sequence in its own element type.
///
/// Total function: the empty sequence yields the multiplicative identity.
///
/// # Examples
/// ```
/// use vecstats::stats::prod;
/// assert_eq!(prod(&[3, 1, 4, 2]), 24);
/// assert_eq!(prod::<i32>(&[]), 1);
/// ```
pub fn prod<T: Copy + One>(values: &[T]) -> T {
    values.iter().copied().fold(T::one(), |acc, v| acc * v)
}

/// Computes the arithmetic mean in f64, whatever the element type.
///
/// # Returns
/// - `Err(Empty)` if `values` has no elements.
///
/// # Examples
/// ```
/// use vecstats::stats::mean;
/// assert_eq!(mean(&[3, 1, 4, 2]), Ok(2.5));
/// ```
pub fn mean<T: Copy + Zero + ToPrimitive>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(SequenceError::Empty);
    }
    Ok(to_f64_lossy(sum(values)) / values.len() as f64)
}

/// Computes the geometric mean as `exp((1/n)·Σ ln v)`.
///
/// Non-positive elements follow IEEE `ln` semantics: `ln(0)` is negative
/// infinity and `ln` of a negative value is NaN, and either propagates
/// through the result rather than raising an error.
///
/// # Returns
/// - `Err(Empty)` if `values` has no elements.
pub fn geo_mean<T: Copy + ToPrimitive>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(SequenceError::Empty);
    }
    let log_sum: f64 = values.iter().map(|&v| to_f64_lossy(v).ln()).sum();
    Ok((log_sum / values.len() as f64).exp())
}

/// Computes the harmonic mean `n / Σ(1/v)`.
///
/// A zero element makes the inner term infinite per IEEE semantics, which
/// drives the result toward zero; this is not trapped as an error.
///
/// # Returns
/// - `Err(Empty)` if `values` has no elements.
pub fn harmonic_mean<T: Copy + ToPrimitive>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(SequenceError::Empty);
    }
    let reciprocal_sum: f64 = values.iter().map(|&v| 1.0 / to_f64_lossy(v)).sum();
    Ok(values.len() as f64 / reciprocal_sum)
}

/// Computes the median without mutating the input.
///
/// Sorts a private copy ascending, then returns the middle element for odd
/// counts or the arithmetic mean of the two middle elements for even
/// counts, always as f64.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `Err(Empty)` if `values` has no elements.
///
/// # Examples
/// ```
/// use vecstats::stats::median;
/// assert_eq!(median(&[3, 1, 2]), Ok(2.0));
/// assert_eq!(median(&[3, 1, 2, 4]), Ok(2.5));
/// ```
pub fn median<T: Copy + PartialOrd + ToPrimitive>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(SequenceError::Empty);
    }
    let mut sorted = values.to_vec();
    // NaN compares as equal so the ordering stays total.
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(to_f64_lossy(sorted[n / 2]))
    } else {
        Ok((to_f64_lossy(sorted[n / 2 - 1]) + to_f64_lossy(sorted[n / 2])) / 2.0)
    }
}

/// Computes the population variance `(1/n)·Σ(mean − vᵢ)²`.
///
/// Divides by the full count `n`, not `n − 1`: the sequence is treated as
/// the whole population, matching [`std_dev`].
///
/// # Returns
/// - `Err(Empty)` if `values` has no elements (propagated from [`mean`]).
///
/// # Examples
/// ```
/// use vecstats::stats::variance;
/// assert_eq!(variance(&[3, 1, 4, 2]), Ok(1.25));
/// ```
pub fn variance<T: Copy + Zero + ToPrimitive>(values: &[T]) -> Result<f64> {
    let m = mean(values)?;
    let squared_deviations: f64 = values
        .iter()
        .map(|&v| {
            let d = m - to_f64_lossy(v);
            d * d
        })
        .sum();
    Ok(squared_deviations / values.len() as f64)
}

/// Computes the population standard deviation `sqrt(variance)`.
///
/// Propagates [`variance`]'s `Empty` failure unchanged.
pub fn std_dev<T: Copy + Zero + ToPrimitive>(values: &[T]) -> Result<f64> {
    Ok(variance(values)?.sqrt())
}

// ---------------------------------------------------------------------------
// Frequency
// ---------------------------------------------------------------------------

/// Returns the most frequent value.
///
/// Ties resolve deterministically to the value whose first occurrence is
/// earliest in the sequence. The winner is chosen by re-scanning the input
/// in order, never by hash-map iteration order, so the result is stable
/// across runs and platforms.
///
/// # Complexity
/// Time: O(n) expected, Space: O(distinct values)
///
/// # Returns
/// - `Err(Empty)` if `values` has no elements.
///
/// # Examples
/// ```
/// use vecstats::stats::mode;
/// assert_eq!(mode(&['h', 'e', 'l', 'l', 'o']), Ok('l'));
/// // Tie between 1 and 2: 1 appears first.
/// assert_eq!(mode(&[1, 2, 1, 2]), Ok(1));
/// ```
pub fn mode<T: Eq + Hash + Clone>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(SequenceError::Empty);
    }
    let mut freq: HashMap<&T, usize> = HashMap::with_capacity(values.len());
    for v in values {
        *freq.entry(v).or_insert(0) += 1;
    }
    let mut winner = &values[0];
    let mut count = freq[&values[0]];
    for v in &values[1..] {
        let c = freq[v];
        if c > count {
            winner = v;
            count = c;
        }
    }
    Ok(winner.clone())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

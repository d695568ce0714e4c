//! Pairwise vector arithmetic: dot product, Euclidean norm, cosine similarity.
//!
//! Two-sequence functions require equal lengths and report
//! [`SequenceError::SizeMismatch`] otherwise, before doing any arithmetic.
//! Degenerate numeric cases (a zero-magnitude vector in
//! [`cosine_similarity`]) follow IEEE 754 division semantics rather than
//! raising an error.

use std::ops::Mul;

use num_traits::{ToPrimitive, Zero};

use crate::error::{Result, SequenceError};
use crate::stats::to_f64_lossy;

/// Computes the dot product `Σ a[i]·b[i]`, accumulated in the element type.
///
/// Multiplies **paired** elements of the two operands; the accumulator and
/// result share the input element type.
///
/// # Returns
/// - `Err(SizeMismatch)` if the sequences differ in length.
///
/// # Examples
/// ```
/// use vecstats::vector::dot;
/// let v = [3, 1, 4, 2];
/// assert_eq!(dot(&v, &v), Ok(30));
/// ```
pub fn dot<T>(a: &[T], b: &[T]) -> Result<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    if a.len() != b.len() {
        return Err(SequenceError::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

/// Computes the Euclidean norm `sqrt(Σ v²)`.
///
/// The sum of squares accumulates in the element type and converts to f64
/// only for the square root. Total function: the empty sequence has
/// magnitude zero.
///
/// # Examples
/// ```
/// use vecstats::vector::magnitude;
/// assert_eq!(magnitude(&[3, 4]), 5.0);
/// assert_eq!(magnitude::<i32>(&[]), 0.0);
/// ```
pub fn magnitude<T>(values: &[T]) -> f64
where
    T: Copy + Zero + Mul<Output = T> + ToPrimitive,
{
    let sum_of_squares = values.iter().fold(T::zero(), |acc, &v| acc + v * v);
    to_f64_lossy(sum_of_squares).sqrt()
}

/// Computes the cosine similarity `dot(a, b) / (|a|·|b|)`.
///
/// Lengths are checked before any magnitude work; a [`dot`] failure would
/// propagate unchanged. If either vector has zero magnitude the division
/// follows IEEE semantics (NaN or infinity), not an error.
///
/// # Returns
/// - `Err(SizeMismatch)` if the sequences differ in length.
///
/// # Examples
/// ```
/// use vecstats::vector::cosine_similarity;
/// // Parallel vectors are maximally similar.
/// let sim = cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]).unwrap();
/// assert!((sim - 1.0).abs() < 1e-12);
/// ```
pub fn cosine_similarity<T>(a: &[T], b: &[T]) -> Result<f64>
where
    T: Copy + Zero + Mul<Output = T> + ToPrimitive,
{
    if a.len() != b.len() {
        return Err(SequenceError::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let d = dot(a, b)?;
    Ok(to_f64_lossy(d) / (magnitude(a) * magnitude(b)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

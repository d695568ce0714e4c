//! Shared error taxonomy for sequence operations.
//!
//! Three conditions cover everything that can go wrong structurally:
//! an empty input where the computation is undefined, two sequences of
//! different lengths where pairwise correspondence is required, and a
//! sample request larger than the population.
//!
//! Numerically unusual but defined inputs (zero denominators, logs of
//! non-positive values) are **not** errors: they follow standard IEEE 754
//! semantics and propagate as infinity or NaN.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Error type for sequence reductions and transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The input sequence has zero elements and the requested
    /// computation is undefined for the empty set.
    Empty,

    /// Two sequences were supplied with different lengths where
    /// pairwise correspondence is required.
    SizeMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// A requested sample size exceeds the population size.
    TooSmall {
        /// Number of elements requested.
        requested: usize,
        /// Number of elements available.
        available: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Empty => write!(f, "empty sequence"),
            SequenceError::SizeMismatch { left, right } => {
                write!(f, "size mismatch: {left} vs {right} elements")
            }
            SequenceError::TooSmall {
                requested,
                available,
            } => {
                write!(
                    f,
                    "sample of {requested} requested from only {available} elements"
                )
            }
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(SequenceError::Empty.to_string(), "empty sequence");
        assert_eq!(
            SequenceError::SizeMismatch { left: 4, right: 3 }.to_string(),
            "size mismatch: 4 vs 3 elements"
        );
        assert_eq!(
            SequenceError::TooSmall {
                requested: 9,
                available: 5
            }
            .to_string(),
            "sample of 9 requested from only 5 elements"
        );
    }
}

//! # vecstats
//!
//! Generic numeric reductions over in-memory sequences: extrema and their
//! indices, the mean family, variance, dot products and cosine similarity,
//! mode, and random sampling/shuffling.
//!
//! This crate is a thin, stateless toolkit: every function takes a slice
//! the caller owns and returns a value, with no caching, no I/O, and no
//! shared state across calls. Apart from [`random::shuffle`]'s documented
//! in-place mutation, every function is pure and safe to call concurrently
//! on distinct sequences.
//!
//! ## Modules
//!
//! - [`stats`] — extrema, index functions, the mean family, variance, mode
//! - [`vector`] — dot product, Euclidean norm, cosine similarity
//! - [`random`] — seeded RNG, Fisher-Yates shuffle, sampling without replacement
//! - [`error`] — the shared [`SequenceError`] taxonomy
//!
//! ## Error contract
//!
//! Structural problems (empty input, mismatched lengths, oversized sample
//! requests) surface as [`SequenceError`]. Numerically unusual but defined
//! inputs never do: zero denominators and logs of non-positive values
//! follow IEEE 754 semantics and propagate as infinity or NaN.

pub mod error;
pub mod random;
pub mod stats;
pub mod vector;

pub use error::{Result, SequenceError};

//! Tirage-specific errors
//!
//! There are only two ways a draw can fail: bad parameters or a bit source
//! that never produces an acceptable word.
use thiserror::Error;

/// An error that Tirage could end up producing.
///
/// A draw either fully succeeds with exactly `count` distinct values or fails
/// with one of these, never with a partial result.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TirageError {
    /// The requested draw is impossible or degenerate, e.g. asking for 6
    /// distinct values out of 5 candidates.
    #[error("invalid draw parameters: cannot pick {count} distinct values in [1, {max_number}]")]
    InvalidParameters { max_number: u64, count: usize },
    /// The bit source failed to produce an acceptable word within the retry
    /// budget, which means it is broken or pathologically biased.
    #[error("no value in [1, {max_number}] accepted after {attempts} attempts")]
    ExhaustedRetries { max_number: u64, attempts: usize },
}

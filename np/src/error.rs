//! Sieve error types

use thiserror::Error;

/// Errors that can occur while answering an n-th prime query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SieveError {
    #[error("Invalid index {index}: must be non-negative")]
    InvalidIndex { index: i64 },

    #[error("Bound {bound} too low for index {index}: only {found} primes found")]
    BoundExceeded { index: u64, bound: u64, found: usize },

    #[error("Index {index} is too large to bound within the integer range")]
    IndexTooLarge { index: u64 },

    #[error("Segment size must be greater than zero")]
    InvalidSegmentSize,

    #[error("Shared sieve lock poisoned")]
    Poisoned,
}

impl SieveError {
    /// Check if this error was caused by the caller's input rather than the sieve
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SieveError::InvalidIndex { .. } | SieveError::IndexTooLarge { .. } | SieveError::InvalidSegmentSize
        )
    }
}

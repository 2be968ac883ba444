//! nthprime - n-th prime oracle backed by an incremental segmented sieve
//!
//! Answers "what is the n-th prime?" (0-indexed, so index 0 is 2) and keeps
//! every prime it discovers in an append-only cache, so repeated or growing
//! queries only sieve the range nobody has looked at yet.
//!
//! # Architecture
//!
//! ```text
//! nth_prime(n)
//!   ├── cache hit?            -> cache[n]
//!   ├── bound::estimate_upper_bound   (Rosser's theorem + margin)
//!   ├── base::primes_up_to            (Eratosthenes up to sqrt(bound))
//!   └── segment::Segment              (fixed-width windows above the frontier)
//! ```
//!
//! # Example
//!
//! ```
//! use nthprime::{NthPrime, PrimeSieve};
//!
//! let mut sieve = PrimeSieve::new();
//! assert_eq!(sieve.nth_prime(0).unwrap(), 2);
//! assert_eq!(sieve.nth_prime(99).unwrap(), 541);
//! assert!(sieve.nth_prime(-3).is_err());
//! ```

pub mod base;
pub mod bound;
pub mod cli;
pub mod config;
mod error;
pub mod segment;
mod shared;
mod sieve;

pub use error::SieveError;
pub use shared::SharedSieve;
pub use sieve::{NthPrime, PrimeSieve, SieveOptions, SieveStats};

/// Default segment width (1M candidates, ~1MB of `bool` per window)
pub const DEFAULT_SEGMENT_SIZE: usize = 1_000_000;

/// Default safety margin added to the Rosser bound
pub const DEFAULT_BOUND_MARGIN: u64 = 10;

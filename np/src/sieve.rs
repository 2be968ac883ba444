//! The prime oracle: cache bookkeeping around the bound, base and segment sieves

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::base;
use crate::bound;
use crate::segment::{self, Segment};
use crate::SieveError;

/// Anything that can answer "what is the n-th prime?" (0-indexed)
pub trait NthPrime {
    /// The `n`-th prime, with index 0 being 2
    fn nth_prime(&mut self, n: i64) -> Result<i64, SieveError>;
}

/// Tunables for the segmented sieve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveOptions {
    /// Integers per segment window
    pub segment_size: usize,
    /// Constant added to the Rosser bound
    pub bound_margin: u64,
}

impl Default for SieveOptions {
    fn default() -> Self {
        Self {
            segment_size: crate::DEFAULT_SEGMENT_SIZE,
            bound_margin: crate::DEFAULT_BOUND_MARGIN,
        }
    }
}

/// Counters describing the work a sieve has done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SieveStats {
    /// Valid queries answered or attempted
    pub queries: u64,
    /// Queries answered without sieving
    pub cache_hits: u64,
    /// Base sieve runs (skipped when the cache already covers sqrt(bound))
    pub base_sieves: u64,
    /// Segment windows sieved
    pub segments_sieved: u64,
    /// Primes appended to the cache
    pub primes_appended: u64,
}

/// Incremental, cache-augmented segmented sieve
///
/// Every prime found is kept, so `primes()[i]` is always the i-th prime and
/// a later query only sieves above the highest cached prime.
#[derive(Debug, Default)]
pub struct PrimeSieve {
    primes: Vec<u64>,
    options: SieveOptions,
    stats: SieveStats,
}

impl PrimeSieve {
    /// Create an empty sieve with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sieve with custom options
    pub fn with_options(options: SieveOptions) -> Result<Self, SieveError> {
        if options.segment_size == 0 {
            return Err(SieveError::InvalidSegmentSize);
        }
        Ok(Self {
            primes: Vec::new(),
            options,
            stats: SieveStats::default(),
        })
    }

    /// Cached primes, in order
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Number of cached primes
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn options(&self) -> SieveOptions {
        self.options
    }

    pub fn stats(&self) -> SieveStats {
        self.stats
    }

    fn prime_at(&mut self, index: u64) -> Result<u64, SieveError> {
        let idx = usize::try_from(index).map_err(|_| SieveError::IndexTooLarge { index })?;

        if let Some(&prime) = self.primes.get(idx) {
            self.stats.cache_hits += 1;
            return Ok(prime);
        }

        let bound = bound::estimate_upper_bound(index, self.options.bound_margin)?;
        let base_primes = self.base_primes(index, bound)?;

        if let Some(&prime) = self.primes.get(idx) {
            debug!(index, prime, "Index covered by base primes");
            return Ok(prime);
        }

        let start = self.primes.last().map_or(2, |&p| p + 1);
        debug!(index, start, bound, cached = self.primes.len(), "Extending prime cache");

        for (low, high) in segment::windows(start, bound, self.options.segment_size) {
            let segment = Segment::sieve(low, high, &base_primes);
            self.stats.segments_sieved += 1;
            trace!(low, high, "Sieved segment");

            for prime in segment.primes() {
                self.primes.push(prime);
                self.stats.primes_appended += 1;
                if self.primes.len() > idx {
                    debug!(index, prime, cached = self.primes.len(), "Found prime");
                    return Ok(prime);
                }
            }
        }

        Err(SieveError::BoundExceeded {
            index,
            bound,
            found: self.primes.len(),
        })
    }

    /// Primes up to `sqrt(bound) + 1`, taken from the cache when it reaches that far
    fn base_primes(&mut self, index: u64, bound: u64) -> Result<Vec<u64>, SieveError> {
        let limit = bound.isqrt() + 1;

        if self.primes.last().is_some_and(|&p| p >= limit) {
            let end = self.primes.partition_point(|&p| p <= limit);
            trace!(limit, count = end, "Reusing cached base primes");
            return Ok(self.primes[..end].to_vec());
        }

        let limit = usize::try_from(limit).map_err(|_| SieveError::IndexTooLarge { index })?;
        let base_primes = base::primes_up_to(limit);
        let appended = base::merge_into(&mut self.primes, &base_primes);
        self.stats.base_sieves += 1;
        self.stats.primes_appended += appended as u64;

        debug!(limit, count = base_primes.len(), appended, "Base sieve complete");
        Ok(base_primes)
    }
}

impl NthPrime for PrimeSieve {
    fn nth_prime(&mut self, n: i64) -> Result<i64, SieveError> {
        let index = u64::try_from(n).map_err(|_| SieveError::InvalidIndex { index: n })?;
        self.stats.queries += 1;

        // Rosser's theorem does not cover the first prime
        if index == 0 {
            self.stats.cache_hits += 1;
            return Ok(2);
        }

        let prime = self.prime_at(index)?;
        i64::try_from(prime).map_err(|_| SieveError::IndexTooLarge { index })
    }
}

//! Thread-safe handle around a single prime cache

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{NthPrime, PrimeSieve, SieveError, SieveStats};

/// Cloneable handle sharing one [`PrimeSieve`] across threads
///
/// Each query holds the lock for its whole duration, so concurrent callers
/// extend the cache one at a time and never observe a partial append.
#[derive(Debug, Clone, Default)]
pub struct SharedSieve {
    inner: Arc<Mutex<PrimeSieve>>,
}

impl SharedSieve {
    pub fn new(sieve: PrimeSieve) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sieve)),
        }
    }

    /// Query through a shared reference
    pub fn get(&self, n: i64) -> Result<i64, SieveError> {
        self.lock()?.nth_prime(n)
    }

    pub fn stats(&self) -> Result<SieveStats, SieveError> {
        Ok(self.lock()?.stats())
    }

    /// Number of primes cached so far
    pub fn cached_len(&self) -> Result<usize, SieveError> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, PrimeSieve>, SieveError> {
        self.inner.lock().map_err(|_| SieveError::Poisoned)
    }
}

impl NthPrime for SharedSieve {
    fn nth_prime(&mut self, n: i64) -> Result<i64, SieveError> {
        self.get(n)
    }
}

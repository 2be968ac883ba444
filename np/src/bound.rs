//! Upper bound for the n-th prime
//!
//! Uses Rosser's theorem: for a 1-indexed count k >= 6,
//! `p_k < k * (ln k + ln ln k)`. The sieve only ever searches up to this bound,
//! so a bound that is too low surfaces as [`SieveError::BoundExceeded`].

use tracing::debug;

use crate::SieveError;

/// Estimate an upper bound for the 0-indexed `n`-th prime, plus `margin`
///
/// Index 0 (prime 2) sits outside the theorem's domain and is answered with
/// `2 + margin`. Indices 1 through 5 also fall below the theorem's
/// precondition; the default margin of 10 covers them (see tests).
pub fn estimate_upper_bound(n: u64, margin: u64) -> Result<u64, SieveError> {
    if n == 0 {
        return 2u64.checked_add(margin).ok_or(SieveError::IndexTooLarge { index: n });
    }

    let count = n.checked_add(1).ok_or(SieveError::IndexTooLarge { index: n })?;
    let nf = count as f64;
    let estimate = nf * (nf.ln() + nf.ln().ln()) + 1.0;

    // Primes are handed back as i64, so the bound has to stay in that range
    if !estimate.is_finite() || estimate >= i64::MAX as f64 {
        return Err(SieveError::IndexTooLarge { index: n });
    }

    let bound = (estimate.floor() as u64)
        .checked_add(margin)
        .filter(|b| *b <= i64::MAX as u64)
        .ok_or(SieveError::IndexTooLarge { index: n })?;

    debug!(n, margin, bound, "Estimated upper bound");
    Ok(bound)
}

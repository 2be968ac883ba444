//! Segmented sieve windows
//!
//! A [`Segment`] covers `[low, high]` with one candidate flag per integer and
//! is crossed off using base primes up to `sqrt(high)`. Windows are produced
//! by [`windows`] and dropped once their primes have been collected, so
//! memory stays bounded by the window width no matter how far the sieve runs.

/// One sieved window of candidates
#[derive(Debug, Clone)]
pub struct Segment {
    low: u64,
    candidates: Vec<bool>,
}

impl Segment {
    /// Sieve `[low, high]` using `base_primes`
    ///
    /// `base_primes` must be sorted and include every prime up to
    /// `sqrt(high)`; primes beyond that are ignored.
    pub fn sieve(low: u64, high: u64, base_primes: &[u64]) -> Self {
        if high < low {
            return Self {
                low,
                candidates: Vec::new(),
            };
        }

        let mut candidates = vec![true; (high - low + 1) as usize];

        // 0 and 1 are not prime
        for value in low..=high.min(1) {
            candidates[(value - low) as usize] = false;
        }

        for &p in base_primes {
            let square = p * p;
            if square > high {
                break;
            }

            // First multiple of p inside the window; below p*p a smaller factor already crossed it
            let first = square.max(low.div_ceil(p) * p);
            let mut multiple = first;
            while multiple <= high {
                candidates[(multiple - low) as usize] = false;
                multiple += p;
            }
        }

        Self { low, candidates }
    }

    /// First integer covered by the window
    pub fn low(&self) -> u64 {
        self.low
    }

    /// Number of integers covered by the window
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Primes in the window, increasing
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.candidates
            .iter()
            .enumerate()
            .filter_map(move |(offset, &prime)| prime.then_some(self.low + offset as u64))
    }
}

/// Split `[start, bound]` into `[low, high]` windows of at most `width` integers
pub fn windows(start: u64, bound: u64, width: usize) -> impl Iterator<Item = (u64, u64)> {
    let width = width.max(1);
    let span = width as u64 - 1;
    (start..=bound)
        .step_by(width)
        .map(move |low| (low, low.saturating_add(span).min(bound)))
}

//! Base sieve: plain Sieve of Eratosthenes for the sieving factors

/// All primes `<= limit` in increasing order (empty when `limit < 2`)
pub fn primes_up_to(limit: usize) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            for j in (i * i..=limit).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(n, &prime)| prime.then_some(n as u64))
        .collect()
}

/// Append every prime in `base` greater than the last cached prime
///
/// `base` must be sorted and gap-free from 2, which `primes_up_to` guarantees,
/// so the cache stays a gap-free prefix of the primes. Returns the number
/// of primes appended.
pub fn merge_into(cache: &mut Vec<u64>, base: &[u64]) -> usize {
    let last = cache.last().copied().unwrap_or(0);
    let start = base.partition_point(|&p| p <= last);
    cache.extend_from_slice(&base[start..]);
    base.len() - start
}

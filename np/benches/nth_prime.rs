use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use nthprime::{NthPrime, PrimeSieve};

const INDICES: [(&str, i64); 4] = [
    ("small", 19),
    ("medium", 500),
    ("large", 1_000_000),
    ("extra_large", 10_000_000),
];

fn bench_nth_prime_cached(c: &mut Criterion) {
    let mut sieve = PrimeSieve::new();
    sieve.nth_prime(10_000_000).expect("prefill cache");

    let mut group = c.benchmark_group("nth_prime_cached");
    for (name, index) in INDICES {
        group.bench_function(name, |b| {
            b.iter(|| std::hint::black_box(sieve.nth_prime(std::hint::black_box(index))))
        });
    }
    group.finish();
}

fn bench_nth_prime_uncached(c: &mut Criterion) {
    let mut group = c.benchmark_group("nth_prime_uncached");
    group.sample_size(10);
    for (name, index) in INDICES {
        group.bench_function(name, |b| {
            b.iter_batched(
                PrimeSieve::new,
                |mut sieve| std::hint::black_box(sieve.nth_prime(std::hint::black_box(index))),
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_nth_prime_incremental(c: &mut Criterion) {
    c.bench_function("nth_prime_incremental_100k_steps", |b| {
        b.iter_batched(
            PrimeSieve::new,
            |mut sieve| {
                for index in (0..=1_000_000).step_by(100_000) {
                    let _ = std::hint::black_box(sieve.nth_prime(index));
                }
            },
            BatchSize::PerIteration,
        )
    });
}

criterion_group!(
    benches,
    bench_nth_prime_cached,
    bench_nth_prime_uncached,
    bench_nth_prime_incremental
);
criterion_main!(benches);

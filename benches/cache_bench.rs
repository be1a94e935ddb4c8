//! Benchmarks for cache throughput
//!
//! This benchmark measures:
//! - Set into a full 1000-entry cache (every insert evicts)
//! - Get over 1000 live entries (every read promotes)
//! - Get contended across threads

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lru_ttl_cache::Cache;

const CAPACITY: usize = 1000;
const TTL: Duration = Duration::from_secs(60);

fn filled_cache() -> Cache<usize> {
    let cache = Cache::new(CAPACITY).expect("non-zero capacity");
    for i in 0..CAPACITY {
        cache.set(format!("key{}", i), i, TTL);
    }
    cache
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_set");
    group.throughput(Throughput::Elements(1));

    group.bench_function("distinct_keys", |b| {
        let cache = Cache::new(CAPACITY).expect("non-zero capacity");
        let mut i = 0usize;
        b.iter(|| {
            cache.set(format!("key{}", i), black_box(i), TTL);
            i += 1;
        })
    });

    group.bench_function("overwrite", |b| {
        let cache = filled_cache();
        let mut i = 0usize;
        b.iter(|| {
            cache.set(format!("key{}", i % CAPACITY), black_box(i), TTL);
            i += 1;
        })
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_get");
    group.throughput(Throughput::Elements(1));

    let cache = filled_cache();
    let keys: Vec<String> = (0..CAPACITY).map(|i| format!("key{}", i)).collect();

    group.bench_function("hit", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let value = cache.get(black_box(keys[i % CAPACITY].as_str()));
            i += 1;
            value
        })
    });

    group.bench_function("miss", |b| b.iter(|| cache.get(black_box("absent"))));

    group.finish();
}

fn bench_contended_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_get_contended");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * CAPACITY) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let cache = Arc::new(filled_cache());
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let cache = Arc::clone(&cache);
                        thread::spawn(move || {
                            for i in 0..CAPACITY {
                                black_box(cache.get(&format!("key{}", (i + t) % CAPACITY)));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().expect("bench thread panicked");
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set, bench_get, bench_contended_get);
criterion_main!(benches);

//! Benchmarks for abcount
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use abcount::frequency::{item_key, AbSketch, Strategy, UniversalHash, DEFAULT_PRIME};
use abcount::oracle::ExactCounter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Hash function
// ============================================================================

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("universal_hash");
    group.throughput(Throughput::Elements(1));

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let h = UniversalHash::new(1024, DEFAULT_PRIME, &mut rng).unwrap();

    group.bench_function("bucket", |b| {
        let mut i = 0i64;
        b.iter(|| {
            black_box(h.bucket(black_box(i)));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("item_key", |b| {
        let mut i = 0u64;
        b.iter(|| {
            black_box(item_key(&i.to_le_bytes()));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Sketch insert
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ab_sketch_insert");
    group.throughput(Throughput::Elements(1));

    for rows in [5, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let mut sketch = AbSketch::with_seed(rows, 1024, 42).unwrap();
            let mut i = 0i64;
            b.iter(|| {
                sketch.insert(black_box(i % 10_000));
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("exact_counter", |b| {
        let mut exact = ExactCounter::new();
        let mut i = 0i64;
        b.iter(|| {
            exact.insert(black_box(i % 10_000));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Sketch query
// ============================================================================

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("ab_sketch_query");
    group.throughput(Throughput::Elements(1));

    let mut sketch = AbSketch::with_seed(15, 1024, 7).unwrap();
    for i in 0..100_000i64 {
        sketch.insert(i % 5_000);
    }

    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            let mut i = 0i64;
            b.iter(|| {
                black_box(sketch.query(&strategy, black_box(i % 5_000)));
                i = i.wrapping_add(1);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hash, bench_insert, bench_query);
criterion_main!(benches);

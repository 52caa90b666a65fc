//! OrderedSet vs IndexedOrderedSet benchmark.
//!
//! Compares linear-scan membership against the hashed index for
//! construction, lookups, removal and union.
//!
//! Pre-generated Vec is reused via clone() in setup so that only the set
//! operation itself is measured.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ringset::{IndexedOrderedSet, OrderedSet};
use std::hint::black_box;

const SIZES: [i32; 3] = [10, 100, 1000];

/// Pre-generates a Vec with every value repeated once, so half the adds are duplicates.
fn generate_values(size: i32) -> Vec<i32> {
    (0..size).chain(0..size).collect()
}

fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_construction");

    for size in SIZES {
        let base_vec = generate_values(size);

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |values| black_box(values.into_iter().collect::<OrderedSet<i32>>()),
                batch_size_for(size),
            );
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |values| black_box(values.into_iter().collect::<IndexedOrderedSet<i32>>()),
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_contains");

    for size in SIZES {
        let linear: OrderedSet<i32> = (0..size).collect();
        let indexed: IndexedOrderedSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let hits = (0..size * 2)
                    .filter(|value| linear.contains(black_box(value)))
                    .count();
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let hits = (0..size * 2)
                    .filter(|value| indexed.contains(black_box(value)))
                    .count();
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn benchmark_discard(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_discard");

    for size in SIZES {
        let linear: OrderedSet<i32> = (0..size).collect();
        let indexed: IndexedOrderedSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || linear.clone(),
                |mut set| {
                    for value in (0..size).rev() {
                        set.discard(black_box(&value));
                    }
                    black_box(set)
                },
                batch_size_for(size),
            );
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || indexed.clone(),
                |mut set| {
                    for value in (0..size).rev() {
                        set.discard(black_box(&value));
                    }
                    black_box(set)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_union");

    for size in SIZES {
        let half = size / 2;
        let linear_left: OrderedSet<i32> = (0..size).collect();
        let linear_right: OrderedSet<i32> = (half..size + half).collect();
        let indexed_left: IndexedOrderedSet<i32> = (0..size).collect();
        let indexed_right: IndexedOrderedSet<i32> = (half..size + half).collect();

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&linear_left) | black_box(&linear_right)));
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&indexed_left) | black_box(&indexed_right)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_contains,
    benchmark_discard,
    benchmark_union
);

criterion_main!(benches);

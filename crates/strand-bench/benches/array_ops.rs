//! Criterion micro-benchmarks for push, insert, pop, and terminated export.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use strand::DynArray;
use strand_bench::{filled, insert_positions, SIZES};

/// Benchmark: grow from the initial capacity by repeated push.
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut array = DynArray::new();
                for i in 0..n {
                    array.push(i).unwrap();
                }
                black_box(array.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: 1K inserts at spread positions into a 10K array.
fn bench_insert_spread(c: &mut Criterion) {
    let positions = insert_positions(10_000, 1_000);
    c.bench_function("insert_spread_10k", |b| {
        b.iter_batched(
            || filled(10_000),
            |mut array| {
                for &pos in &positions {
                    array.insert(pos, pos).unwrap();
                }
                black_box(array.len());
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark: drain a 10K array by pop.
fn bench_pop_all(c: &mut Criterion) {
    c.bench_function("pop_all_10k", |b| {
        b.iter_batched(
            || filled(10_000),
            |mut array| {
                while let Ok(v) = array.pop() {
                    black_box(v);
                }
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark: terminated export of arrays of each size.
fn bench_to_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_array");
    for n in SIZES {
        let array = filled(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &array, |b, array| {
            b.iter(|| {
                let copy = array.to_array().unwrap();
                black_box(copy.as_slice().len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_insert_spread,
    bench_pop_all,
    bench_to_array
);
criterion_main!(benches);

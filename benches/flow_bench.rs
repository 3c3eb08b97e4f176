//! Benchmark for flow pipelines.
//!
//! Compares chained flows with the equivalent eager iterator code, and
//! measures the capability fast paths against their linear-scan fallbacks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyflow::flow::Flow;
use std::cell::RefCell;
use std::hint::black_box;
use std::rc::Rc;

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline");

    for size in [100, 1_000, 10_000] {
        let data: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("flow", size), &data, |bencher, data| {
            let flow = Flow::create(data.clone())
                .filter(|element| element % 3 == 0)
                .map(|element| element * element)
                .limit(100)
                .unwrap();
            bencher.iter(|| black_box(flow.to_list()));
        });

        // Baseline: the same pipeline as a plain iterator chain
        group.bench_with_input(BenchmarkId::new("iterator", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result: Vec<u64> = data
                    .iter()
                    .filter(|element| *element % 3 == 0)
                    .map(|element| element * element)
                    .take(100)
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn benchmark_distinct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distinct");

    for size in [100, 1_000, 10_000] {
        let data: Vec<u64> = (0..size).map(|element| element % 97).collect();
        let flow = Flow::create(data).distinct();
        group.bench_with_input(BenchmarkId::new("list", size), &flow, |bencher, flow| {
            bencher.iter(|| black_box(flow.count()));
        });
    }

    group.finish();
}

// =============================================================================
// Capability Benchmarks
// =============================================================================

fn benchmark_capabilities(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("capabilities");
    let size: u64 = 10_000;

    let indexed = Flow::create((0..size).collect::<Vec<_>>());
    let scanned = Flow::calling(move || 0..size);

    group.bench_function("last_indexed", |bencher| {
        bencher.iter(|| black_box(indexed.last()));
    });
    group.bench_function("last_scanned", |bencher| {
        bencher.iter(|| black_box(scanned.last()));
    });

    group.bench_function("reverse_native", |bencher| {
        let reversed = indexed.reverse();
        bencher.iter(|| black_box(reversed.first()));
    });
    group.bench_function("reverse_buffered", |bencher| {
        let reversed = scanned.reverse();
        bencher.iter(|| black_box(reversed.first()));
    });

    let ranged = Flow::create(0..size);
    group.bench_function("contains_membership", |bencher| {
        bencher.iter(|| black_box(ranged.contains(&(size - 1))));
    });
    group.bench_function("contains_scanned", |bencher| {
        bencher.iter(|| black_box(scanned.contains(&(size - 1))));
    });

    group.finish();
}

fn benchmark_live_list(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("live_list");

    let data = Rc::new(RefCell::new((0..10_000_u64).collect::<Vec<_>>()));
    let flow = Flow::create(Rc::clone(&data)).map(|element| element + 1);

    group.bench_function("sum", |bencher| {
        bencher.iter(|| black_box(flow.digest(|cursor| cursor.sum::<u64>())));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pipeline,
    benchmark_distinct,
    benchmark_capabilities,
    benchmark_live_list
);
criterion_main!(benches);

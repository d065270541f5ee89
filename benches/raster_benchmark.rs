#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization.

use std::hint::black_box;

use aaline::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn rasterize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");

    for length in [10, 100, 1_000, 10_000] {
        let line = Line::from_coords(0.0, 0.0, length as f64, length as f64 * 0.8);

        group.bench_with_input(
            BenchmarkId::new("gupta_sproull", length),
            &line,
            |b, &line| {
                b.iter(|| {
                    GuptaSproull
                        .rasterize(black_box(line))
                        .expect("finite endpoints")
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("xiaolin_wu", length),
            &line,
            |b, &line| {
                b.iter(|| {
                    XiaolinWu
                        .rasterize(black_box(line))
                        .expect("finite endpoints")
                });
            },
        );
    }

    group.finish();
}

fn steep_line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_steep");

    let line = Line::from_coords(0.0, 0.0, 800.0, 1_000.0);
    group.bench_function("gupta_sproull", |b| {
        b.iter(|| {
            GuptaSproull
                .rasterize(black_box(line))
                .expect("finite endpoints")
        });
    });
    group.bench_function("xiaolin_wu", |b| {
        b.iter(|| {
            XiaolinWu
                .rasterize(black_box(line))
                .expect("finite endpoints")
        });
    });

    group.finish();
}

criterion_group!(benches, rasterize_benchmark, steep_line_benchmark);
criterion_main!(benches);

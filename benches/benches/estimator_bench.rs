//! # Estimator Benchmarks
//!
//! Measures the estimator surface: atomic RZERO access, live reads through a
//! sample source and full measurements.
//!
//! Run: `cargo bench --bench estimator_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mq135::{Ambient, GasConcentrationEstimator};
use mq135_core::prelude::*;

/// Benchmark RZERO load and publish
fn bench_rzero(c: &mut Criterion) {
    let mut group = c.benchmark_group("rzero");
    let estimator = GasConcentrationEstimator::new(0);

    group.bench_function("load", |b| b.iter(|| black_box(estimator.rzero())));

    group.bench_function("publish", |b| {
        b.iter(|| estimator.set_rzero(black_box(76.63)))
    });

    group.finish();
}

/// Benchmark reads through an injected sample source
fn bench_live_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("live_reads");
    let estimator = GasConcentrationEstimator::new(0);
    let mut adc = |_: Channel| Ok::<_, SensorError>(black_box(16000));

    group.bench_function("read_ppm", |b| b.iter(|| estimator.read_ppm(&mut adc)));

    group.bench_function("read_corrected_ppm", |b| {
        b.iter(|| estimator.read_corrected_ppm(&mut adc, black_box(25.0), black_box(60.0)))
    });

    group.bench_function("read_rzero", |b| b.iter(|| estimator.read_rzero(&mut adc)));

    group.bench_function("measure", |b| {
        b.iter(|| estimator.measure(&mut adc, black_box(Some(Ambient::new(25.0, 60.0)))))
    });

    group.finish();
}

criterion_group!(benches, bench_rzero, bench_live_reads);
criterion_main!(benches);

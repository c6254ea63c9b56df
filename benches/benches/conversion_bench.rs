//! # Conversion Benchmarks
//!
//! Measures the pure conversion chain: raw sample → resistance → ppm, and the
//! inverse calibration.
//!
//! Run: `cargo bench --bench conversion_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mq135::conversion;
use mq135::{Mq135Constants, Mq135Result};

/// Benchmark each leaf conversion
fn bench_leaf_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_conversions");
    let constants = Mq135Constants::default();

    group.bench_function("raw_to_resistance", |b| {
        b.iter(|| conversion::raw_to_resistance(black_box(&constants), black_box(16000)))
    });

    group.bench_function("correction_factor", |b| {
        b.iter(|| conversion::correction_factor(black_box(&constants), black_box(25.0), black_box(60.0)))
    });

    group.bench_function("resistance_to_ppm", |b| {
        b.iter(|| conversion::resistance_to_ppm(black_box(&constants), black_box(92.4), black_box(76.63)))
    });

    group.bench_function("reference_resistance", |b| {
        b.iter(|| {
            conversion::reference_resistance(black_box(&constants), black_box(92.4), black_box(397.13))
        })
    });

    group.finish();
}

/// Benchmark the full chain across the converter range
fn bench_full_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_chain");
    let constants = Mq135Constants::default();

    for sample in [1000, 8000, 16000, 32767] {
        group.bench_with_input(BenchmarkId::new("uncorrected", sample), &sample, |b, &sample| {
            b.iter(|| -> Mq135Result<f64> {
                let resistance = conversion::raw_to_resistance(&constants, black_box(sample))?;
                conversion::resistance_to_ppm(&constants, resistance, 76.63)
            })
        });

        group.bench_with_input(BenchmarkId::new("corrected", sample), &sample, |b, &sample| {
            b.iter(|| -> Mq135Result<f64> {
                let resistance = conversion::raw_to_resistance(&constants, black_box(sample))?;
                let corrected = conversion::corrected_resistance(&constants, 25.0, 60.0, resistance)?;
                conversion::resistance_to_ppm(&constants, corrected, 76.63)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_leaf_conversions, bench_full_chain);
criterion_main!(benches);

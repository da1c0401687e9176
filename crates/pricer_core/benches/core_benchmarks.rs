//! Criterion benchmarks for pricer_core numerical primitives.
//!
//! Measures the normal CDF used by every closed-form evaluation and the
//! statistics reduction applied to hedging errors, across sample sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::math::statistics::{mean, percentile, population_std_dev};

/// Deterministic, roughly symmetric samples in [-3, 3].
fn generate_samples(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let u = (i as f64 * 0.618_033_988_749_895).fract();
            6.0 * u - 3.0
        })
        .collect()
}

/// Benchmark the normal CDF and PDF.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    let xs = generate_samples(1_000);

    group.bench_function("norm_cdf_1000", |b| {
        b.iter(|| xs.iter().map(|&x| norm_cdf(black_box(x))).sum::<f64>())
    });
    group.bench_function("norm_pdf_1000", |b| {
        b.iter(|| xs.iter().map(|&x| norm_pdf(black_box(x))).sum::<f64>())
    });

    group.finish();
}

/// Benchmark the hedging-error statistics at typical path counts.
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for n in [1_000usize, 10_000, 100_000] {
        let samples = generate_samples(n);
        group.bench_with_input(BenchmarkId::new("mean_std", n), &samples, |b, s| {
            b.iter(|| (mean(black_box(s)), population_std_dev(black_box(s))))
        });
        group.bench_with_input(BenchmarkId::new("percentile_5", n), &samples, |b, s| {
            b.iter(|| percentile(black_box(s), 5.0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distributions, bench_statistics);
criterion_main!(benches);

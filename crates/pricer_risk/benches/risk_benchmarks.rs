//! Criterion benchmarks for pricer_risk stress testing.
//!
//! Benchmarks cover:
//! - The standard five-scenario grid
//! - Larger custom spot/volatility grids

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::{ContractSpec, OptionKind};
use pricer_risk::scenarios::{stress_test, ScenarioEngine, ShockScenario};

/// Build an n×n grid of spot and volatility shocks.
fn grid_engine(n: usize) -> ScenarioEngine {
    let mut engine = ScenarioEngine::new();
    for i in 0..n {
        for j in 0..n {
            let spot_shock = -0.3 + 0.6 * i as f64 / (n - 1) as f64;
            let vol_shock = -0.5 + 1.0 * j as f64 / (n - 1) as f64;
            if let Ok(scenario) = ShockScenario::new(format!("{}x{}", i, j), spot_shock, vol_shock) {
                engine.add_scenario(scenario);
            }
        }
    }
    engine
}

fn bench_stress_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress_test");
    let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);

    group.bench_function("standard_grid", |b| {
        b.iter(|| stress_test(black_box(&spec)).unwrap());
    });

    for n in [5, 20, 50] {
        let engine = grid_engine(n);
        group.bench_with_input(BenchmarkId::new("custom_grid", n * n), &engine, |b, engine| {
            b.iter(|| engine.execute(black_box(&spec)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stress_test);
criterion_main!(benches);

//! Convergence tests for the delta-hedging simulator.
//!
//! Discrete rebalancing leaves a replication error whose dispersion shrinks
//! roughly like 1/sqrt(n_steps). These tests verify:
//!
//! 1. **Monotone decrease**: std of hedging error falls as rebalancing gets finer
//! 2. **Unbiasedness**: mean hedging error stays close to zero
//! 3. **Put/call symmetry**: both kinds replicate with comparable quality

use pricer_core::types::{ContractSpec, OptionKind};
use pricer_pricing::mc::{HedgeSimulator, SimulationConfig};
use pricer_pricing::rng::PricerRng;

fn std_error(spec: &ContractSpec, n_steps: usize, n_paths: usize, seed: u64) -> f64 {
    let config = SimulationConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .build()
        .unwrap();
    HedgeSimulator::new(config)
        .simulate(spec, &mut PricerRng::from_seed(seed))
        .unwrap()
        .statistics
        .std_error
}

#[test]
fn test_std_error_decreases_with_rebalancing_frequency() {
    let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);

    // Monthly, weekly, daily
    let stds: Vec<f64> = [12, 52, 252]
        .iter()
        .map(|&n_steps| std_error(&spec, n_steps, 10_000, 42))
        .collect();

    for pair in stds.windows(2) {
        assert!(
            pair[1] < pair[0],
            "hedging error std did not decrease: {:?}",
            stds
        );
    }
    // 21x more rebalancing should cut dispersion by well over half
    assert!(stds[2] < 0.5 * stds[0], "{:?}", stds);
}

#[test]
fn test_put_std_error_decreases() {
    let spec = ContractSpec::new(100.0, 110.0, 0.5, 0.03, 0.3, OptionKind::Put);
    let coarse = std_error(&spec, 12, 10_000, 7);
    let fine = std_error(&spec, 252, 10_000, 7);
    assert!(fine < coarse, "coarse {} fine {}", coarse, fine);
}

#[test]
fn test_mean_error_near_zero() {
    let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
    let config = SimulationConfig::builder()
        .n_paths(10_000)
        .n_steps(52)
        .build()
        .unwrap();
    let result = HedgeSimulator::new(config)
        .simulate(&spec, &mut PricerRng::from_seed(2024))
        .unwrap();

    let stats = result.statistics;
    // Standard error of the mean is std/sqrt(n) ≈ 0.01
    assert!(stats.mean_error.abs() < 0.1, "mean error {}", stats.mean_error);
    assert!(stats.var_95 < stats.mean_error);
    assert!(stats.std_error > 0.0);
}

#[test]
fn test_statistics_use_every_path() {
    let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put);
    let config = SimulationConfig::builder()
        .n_paths(2_000)
        .n_steps(12)
        .display_limit(5)
        .build()
        .unwrap();
    let result = HedgeSimulator::new(config)
        .simulate(&spec, &mut PricerRng::from_seed(1))
        .unwrap();

    assert_eq!(result.display_paths, 5);
    assert_eq!(result.prices.n_paths(), 5);
    assert_eq!(result.hedging_errors.len(), 2_000);
}

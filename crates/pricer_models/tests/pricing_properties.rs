//! Property tests for the closed-form and lattice pricers.
//!
//! Verifies:
//! - Put-call parity over random contracts
//! - Greek sign and range bounds
//! - Exact-zero degenerate results
//! - Lattice convergence to the closed form

use pricer_core::types::{ContractSpec, OptionKind};
use pricer_models::analytical::{black_scholes, evaluate, evaluate_delta, PricingResult};
use pricer_models::lattice::{crr_price, CrrLattice};
use proptest::prelude::*;

fn contract() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        1.0..500.0_f64,  // spot
        1.0..500.0_f64,  // strike
        0.01..5.0_f64,   // maturity
        -0.05..0.15_f64, // rate
        0.01..1.5_f64,   // volatility
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// C - P = S - K·e^(-rT)
    #[test]
    fn prop_put_call_parity((s, k, t, r, v) in contract()) {
        let spec = ContractSpec::new(s, k, t, r, v, OptionKind::Call);
        let call = black_scholes(&spec).unwrap();
        let put = black_scholes(&spec.with_kind(OptionKind::Put)).unwrap();
        let forward_gap = s - k * (-r * t).exp();
        let tolerance = 1e-6 * s.max(k);
        prop_assert!(
            (call.price - put.price - forward_gap).abs() < tolerance,
            "parity broken: C={} P={} S-Ke^-rT={}",
            call.price, put.price, forward_gap
        );
    }

    #[test]
    fn prop_greek_bounds((s, k, t, r, v) in contract()) {
        let spec = ContractSpec::new(s, k, t, r, v, OptionKind::Call);
        let call = black_scholes(&spec).unwrap();
        let put = black_scholes(&spec.with_kind(OptionKind::Put)).unwrap();

        prop_assert!((0.0..=1.0).contains(&call.delta), "call delta {}", call.delta);
        prop_assert!((-1.0..=0.0).contains(&put.delta), "put delta {}", put.delta);
        for result in [call, put] {
            prop_assert!(result.gamma >= 0.0);
            prop_assert!(result.vega >= 0.0);
            // Allow for the erfc approximation error on far out-of-the-money legs
            prop_assert!(result.price >= -1e-6 * s.max(k));
        }
    }

    #[test]
    fn prop_delta_fast_path_is_bit_identical((s, k, t, r, v) in contract()) {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let spec = ContractSpec::new(s, k, t, r, v, kind);
            prop_assert_eq!(evaluate_delta(&spec), evaluate(&spec).delta);
        }
    }

    #[test]
    fn prop_degenerate_is_exact_zero(
        s in 1.0..500.0_f64,
        k in 1.0..500.0_f64,
        r in -0.05..0.15_f64,
        maturity in -2.0..=0.0_f64,
    ) {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let spec = ContractSpec::new(s, k, maturity, r, 0.2, kind);
            prop_assert_eq!(black_scholes(&spec).unwrap(), PricingResult::ZERO);
            prop_assert_eq!(crr_price(&spec, 16).unwrap().price, 0.0);
        }
    }
}

#[test]
fn test_benchmark_contract() {
    let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
    let result = black_scholes(&spec).unwrap();
    assert!((result.price - 10.45).abs() < 1e-2);
    assert!((result.delta - 0.6368).abs() < 1e-2);
}

#[test]
fn test_degenerate_fields_are_exactly_zero() {
    let spec = ContractSpec::new(120.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Call);
    let result = black_scholes(&spec).unwrap();
    assert_eq!(result.price, 0.0);
    assert_eq!(result.delta, 0.0);
    assert_eq!(result.gamma, 0.0);
    assert_eq!(result.vega, 0.0);
    assert_eq!(result.theta, 0.0);
    assert_eq!(result.rho, 0.0);
}

#[test]
fn test_lattice_converges_across_moneyness() {
    let mut lattice = CrrLattice::with_capacity(500);
    for &strike in &[80.0, 100.0, 120.0] {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let spec = ContractSpec::new(100.0, strike, 1.0, 0.05, 0.2, kind);
            let analytic = black_scholes(&spec).unwrap().price;
            let tree = lattice.price(&spec, 500).unwrap().price;
            assert!(
                (tree - analytic).abs() < 1e-2,
                "K={} {}: lattice {} vs analytic {}",
                strike,
                kind,
                tree,
                analytic
            );
        }
    }
}

#[test]
fn test_lattice_error_shrinks_with_steps() {
    let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put);
    let analytic = black_scholes(&spec).unwrap().price;
    let mut lattice = CrrLattice::new();
    let coarse = (lattice.price(&spec, 10).unwrap().price - analytic).abs();
    let fine = (lattice.price(&spec, 1000).unwrap().price - analytic).abs();
    assert!(fine < coarse, "coarse {} fine {}", coarse, fine);
}

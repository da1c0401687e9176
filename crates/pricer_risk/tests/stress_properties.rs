//! Property tests for the standard stress grid.

use pricer_core::types::{ContractSpec, OptionKind};
use pricer_risk::scenarios::{stress_test, VOL_FLOOR};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = OptionKind> {
    prop_oneof![Just(OptionKind::Call), Just(OptionKind::Put)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The unshocked scenario reproduces the base price bit-for-bit,
    /// including volatilities below the floor and degenerate contracts.
    #[test]
    fn prop_base_case_pnl_is_exactly_zero(
        spot in 1.0..500.0_f64,
        strike in 1.0..500.0_f64,
        maturity in -1.0..5.0_f64,
        rate in -0.05..0.15_f64,
        volatility in 0.0..1.5_f64,
        kind in kind(),
    ) {
        let spec = ContractSpec::new(spot, strike, maturity, rate, volatility, kind);
        let results = stress_test(&spec).unwrap();
        prop_assert_eq!(results.len(), 5);
        prop_assert_eq!(results[2].pnl, 0.0);
    }

    #[test]
    fn prop_shocked_volatility_respects_floor(
        volatility in 0.0..1.5_f64,
        kind in kind(),
    ) {
        let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, volatility, kind);
        for result in stress_test(&spec).unwrap() {
            if result.vol_shock != 0.0 {
                prop_assert!(result.volatility >= VOL_FLOOR);
            }
        }
    }

    /// Calls are worth more after a rally than after a crash; puts the reverse.
    #[test]
    fn prop_pnl_direction_follows_kind(
        strike in 50.0..130.0_f64,
        volatility in 0.1..0.4_f64,
    ) {
        let call = stress_test(&ContractSpec::new(100.0, strike, 1.0, 0.03, volatility, OptionKind::Call)).unwrap();
        let put = stress_test(&ContractSpec::new(100.0, strike, 1.0, 0.03, volatility, OptionKind::Put)).unwrap();
        prop_assert!(call[4].pnl > call[0].pnl);
        prop_assert!(put[0].pnl > put[4].pnl);
    }
}

#[test]
fn test_concrete_grid() {
    let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
    let results = stress_test(&spec).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Crash -20%", "Bear -10%", "Base Case", "Bull +10%", "Rally +20%"]);
    assert!((results[2].price - 10.4506).abs() < 1e-3);
    // P&L increases monotonically from crash to rally for a long call
    for pair in results.windows(2) {
        assert!(pair[1].pnl > pair[0].pnl, "{} vs {}", pair[0].name, pair[1].name);
    }
}

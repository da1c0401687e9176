//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable through both their
//! full paths and the module-level re-exports.

use pricer_core::math::{mean, norm_cdf, norm_pdf, percentile, population_std_dev};
use pricer_core::types::{ContractSpec, OptionKind, PricingError};

#[test]
fn test_distribution_exports() {
    use pricer_core::math::distributions;

    assert_eq!(norm_cdf(0.25_f64), distributions::norm_cdf(0.25_f64));
    assert_eq!(norm_pdf(0.25_f64), distributions::norm_pdf(0.25_f64));
    // Generic over Float
    assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
}

#[test]
fn test_statistics_exports() {
    use pricer_core::math::statistics;

    let samples = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(mean(&samples), statistics::mean(&samples));
    assert_eq!(population_std_dev(&samples), statistics::population_std_dev(&samples));
    assert_eq!(percentile(&samples, 50.0), statistics::percentile(&samples, 50.0));
    assert_eq!(mean(&[]), None);
}

#[test]
fn test_type_exports() {
    use pricer_core::types::contract::ContractSpec as FullPathSpec;
    use pricer_core::types::error::PricingError as FullPathError;
    use pricer_core::types::option_kind::OptionKind as FullPathKind;

    let spec: FullPathSpec = ContractSpec::new(100.0, 95.0, 0.5, 0.01, 0.3, OptionKind::Put);
    assert_eq!(spec.kind, FullPathKind::Put);

    let err: FullPathError = PricingError::invalid("strike", "must be positive");
    assert_eq!(err.parameter(), "strike");
}

#[test]
fn test_contract_validation_through_exports() {
    let bad = ContractSpec::default().with_spot(f64::NAN);
    assert_eq!(bad.validate().unwrap_err().parameter(), "spot");

    let degenerate = ContractSpec::default().with_maturity(0.0);
    assert!(degenerate.validate().is_ok());
    assert!(degenerate.is_degenerate());
}

#[test]
fn test_option_kind_round_trips_through_display() {
    for kind in [OptionKind::Call, OptionKind::Put] {
        assert_eq!(kind.to_string().parse::<OptionKind>().unwrap(), kind);
    }
}

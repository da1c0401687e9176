//! Property-based tests for the normal distribution and sample statistics.

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::math::statistics::{mean, percentile, population_std_dev};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Φ(x) + Φ(-x) = 1, which put-call parity relies on.
    #[test]
    fn prop_norm_cdf_symmetry(x in -10.0f64..10.0) {
        prop_assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_norm_cdf_is_monotone_and_bounded(a in -8.0f64..8.0, b in -8.0f64..8.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(norm_cdf(lo) <= norm_cdf(hi) + 1e-7);
        prop_assert!(norm_cdf(a) >= -1e-12 && norm_cdf(a) <= 1.0 + 1e-12);
    }

    #[test]
    fn prop_norm_pdf_is_even_and_positive(x in -10.0f64..10.0) {
        prop_assert_eq!(norm_pdf(x), norm_pdf(-x));
        prop_assert!(norm_pdf(x) > 0.0);
    }

    #[test]
    fn prop_percentile_monotone_in_q(
        samples in prop::collection::vec(-1e3f64..1e3, 1..200),
        q1 in 0.0f64..100.0,
        q2 in 0.0f64..100.0,
    ) {
        let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        let p_lo = percentile(&samples, lo).unwrap();
        let p_hi = percentile(&samples, hi).unwrap();
        prop_assert!(p_lo <= p_hi + 1e-9);
    }

    #[test]
    fn prop_percentile_within_sample_range(
        samples in prop::collection::vec(-1e3f64..1e3, 1..200),
        q in 0.0f64..100.0,
    ) {
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let p = percentile(&samples, q).unwrap();
        prop_assert!(p >= min - 1e-9 && p <= max + 1e-9);
    }

    #[test]
    fn prop_std_dev_is_shift_invariant(
        samples in prop::collection::vec(-1e3f64..1e3, 1..200),
        shift in -1e3f64..1e3,
    ) {
        let shifted: Vec<f64> = samples.iter().map(|s| s + shift).collect();
        let sd = population_std_dev(&samples).unwrap();
        let sd_shifted = population_std_dev(&shifted).unwrap();
        prop_assert!(sd >= 0.0);
        prop_assert!((sd - sd_shifted).abs() < 1e-6);
        prop_assert!((mean(&shifted).unwrap() - mean(&samples).unwrap() - shift).abs() < 1e-6);
    }
}

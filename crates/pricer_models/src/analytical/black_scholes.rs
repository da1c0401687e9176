//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form prices and Greeks for European calls and
//! puts under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Reporting Conventions
//!
//! | Greek | Reported as |
//! |-------|-------------|
//! | vega  | ∂V/∂σ / 100 (per 1% volatility move) |
//! | theta | ∂V/∂t / 365 (per calendar day) |
//! | rho   | ∂V/∂r / 100 (per 1% rate move) |
//!
//! ## Degenerate Contracts
//!
//! When T ≤ 0 or σ ≤ 0 every field of [`PricingResult`] is exactly zero.
//! This is a flat zero, not intrinsic value. [`evaluate`] is the only place
//! the rule is applied.

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{ContractSpec, OptionKind, PricingError};

/// Days per year used to express theta per calendar day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Scaling applied to vega and rho so they read per 1-point (1%) move.
pub const PERCENT_POINT: f64 = 100.0;

/// Price and Greeks of a single option.
///
/// All fields are always populated; degenerate contracts yield zeros.
///
/// # Examples
/// ```
/// use pricer_models::analytical::PricingResult;
///
/// let zero = PricingResult::ZERO;
/// assert_eq!(zero.price, 0.0);
/// assert_eq!(zero.rho, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value.
    pub price: f64,
    /// ∂V/∂S.
    pub delta: f64,
    /// ∂²V/∂S².
    pub gamma: f64,
    /// ∂V/∂σ per 1% volatility move.
    pub vega: f64,
    /// ∂V/∂t per calendar day.
    pub theta: f64,
    /// ∂V/∂r per 1% rate move.
    pub rho: f64,
}

impl PricingResult {
    /// The all-zero result returned for degenerate contracts.
    pub const ZERO: Self = Self {
        price: 0.0,
        delta: 0.0,
        gamma: 0.0,
        vega: 0.0,
        theta: 0.0,
        rho: 0.0,
    };
}

/// Prices a contract and computes its Greeks.
///
/// # Errors
/// - `PricingError::InvalidArgument` if the contract fails
///   [`ContractSpec::validate`]
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractSpec, OptionKind};
/// use pricer_models::analytical::black_scholes;
///
/// let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
/// let result = black_scholes(&spec).unwrap();
/// assert!((result.price - 10.4506).abs() < 1e-3);
/// assert!((result.delta - 0.6368).abs() < 1e-3);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let put = black_scholes(&spec.with_kind(OptionKind::Put)).unwrap();
/// let parity = result.price - put.price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
pub fn black_scholes(spec: &ContractSpec) -> Result<PricingResult, PricingError> {
    spec.validate()?;
    Ok(evaluate(spec))
}

/// Prices an already validated contract.
///
/// This is the guarded entry point: degenerate contracts return
/// [`PricingResult::ZERO`] before any division by σ√T can happen.
/// Callers that reprice the same validated terms many times (hedge replay,
/// scenario grids) use this to skip revalidation.
pub fn evaluate(spec: &ContractSpec) -> PricingResult {
    if spec.is_degenerate() {
        return PricingResult::ZERO;
    }

    let ContractSpec {
        spot,
        strike,
        maturity,
        rate,
        volatility,
        kind,
    } = *spec;

    let sqrt_t = maturity.sqrt();
    let (d1, d2) = d1_d2(spec);
    let discount = (-rate * maturity).exp();
    let pdf_d1 = norm_pdf(d1);

    // Common theta term: -(S·φ(d₁)·σ)/(2√T)
    let theta_decay = -(spot * pdf_d1 * volatility) / (2.0 * sqrt_t);

    let (price, delta, rho, theta) = match kind {
        OptionKind::Call => {
            let n_d2 = norm_cdf(d2);
            (
                spot * norm_cdf(d1) - strike * discount * n_d2,
                norm_cdf(d1),
                strike * maturity * discount * n_d2,
                theta_decay - rate * strike * discount * n_d2,
            )
        }
        OptionKind::Put => {
            let n_minus_d2 = norm_cdf(-d2);
            (
                strike * discount * n_minus_d2 - spot * norm_cdf(-d1),
                -norm_cdf(-d1),
                -strike * maturity * discount * n_minus_d2,
                theta_decay + rate * strike * discount * n_minus_d2,
            )
        }
    };

    let gamma = pdf_d1 / (spot * volatility * sqrt_t);
    let vega = spot * sqrt_t * pdf_d1;

    PricingResult {
        price,
        delta,
        gamma,
        vega: vega / PERCENT_POINT,
        theta: theta / DAYS_PER_YEAR,
        rho: rho / PERCENT_POINT,
    }
}

/// Delta only, for hot loops.
///
/// Bit-identical to `evaluate(spec).delta`: it shares the d₁ computation
/// and the degenerate rule but skips the remaining Greeks.
#[inline]
pub fn evaluate_delta(spec: &ContractSpec) -> f64 {
    if spec.is_degenerate() {
        return 0.0;
    }
    let (d1, _) = d1_d2(spec);
    match spec.kind {
        OptionKind::Call => norm_cdf(d1),
        OptionKind::Put => -norm_cdf(-d1),
    }
}

/// d₁ and d₂ for a non-degenerate contract.
#[inline]
fn d1_d2(spec: &ContractSpec) -> (f64, f64) {
    let vol_sqrt_t = spec.volatility * spec.maturity.sqrt();
    let drift = (spec.rate + 0.5 * spec.volatility * spec.volatility) * spec.maturity;
    let d1 = ((spec.spot / spec.strike).ln() + drift) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

//! Contract terms for a single vanilla option.

use super::error::PricingError;
use super::option_kind::OptionKind;

/// Terms of a European vanilla option plus the flat market inputs needed to
/// price it.
///
/// # Invariants
///
/// - `spot > 0` and `strike > 0` (checked by [`ContractSpec::validate`])
/// - `maturity <= 0` or `volatility <= 0` is a degenerate contract: every
///   pricer returns an all-zero result for it rather than failing
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractSpec, OptionKind};
///
/// let spec = ContractSpec::new(100.0, 105.0, 0.5, 0.03, 0.25, OptionKind::Put);
/// assert!(spec.validate().is_ok());
///
/// let expired = spec.with_maturity(0.0);
/// assert!(expired.is_degenerate());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractSpec {
    /// Spot price of the underlying (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r), annualised.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Call or put.
    pub kind: OptionKind,
}

impl ContractSpec {
    /// Creates contract terms.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot price (S)
    /// * `strike` - Strike price (K)
    /// * `maturity` - Time to maturity in years (T)
    /// * `rate` - Risk-free rate (r)
    /// * `volatility` - Volatility (σ)
    /// * `kind` - Call or put
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        }
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different time to maturity.
    #[inline]
    pub fn with_maturity(self, maturity: f64) -> Self {
        Self { maturity, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different option kind.
    #[inline]
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }

    /// `true` when the contract falls in the zero-result branch
    /// (`maturity <= 0`, `volatility <= 0`, or σ√T underflowing to zero
    /// for a positive subnormal σ).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.maturity <= 0.0
            || self.volatility <= 0.0
            || self.volatility * self.maturity.sqrt() == 0.0
    }

    /// Validates the contract terms.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidArgument` if:
    /// - `spot` or `strike` is not a finite positive number
    /// - `maturity`, `rate` or `volatility` is NaN or infinite
    pub fn validate(&self) -> Result<(), PricingError> {
        check_positive("spot", self.spot)?;
        check_positive("strike", self.strike)?;
        check_finite("maturity", self.maturity)?;
        check_finite("rate", self.rate)?;
        check_finite("volatility", self.volatility)?;
        Ok(())
    }
}

impl Default for ContractSpec {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            kind: OptionKind::Call,
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be a finite positive number, got {}", value),
        ))
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

//! Option kind discriminant.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Call or put.
///
/// A closed two-variant type; string input is only accepted through
/// [`FromStr`], which rejects anything it does not recognise.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// let kind: OptionKind = "put".parse().unwrap();
/// assert_eq!(kind, OptionKind::Put);
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Returns `true` for [`OptionKind::Call`].
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Payoff at expiry for the given underlying price.
    ///
    /// - Call: max(S - K, 0)
    /// - Put: max(K - S, 0)
    #[inline]
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Delta of the position at (or within a hair of) expiry.
    ///
    /// - Call: 1 if S > K, else 0
    /// - Put: -1 if S < K, else 0
    #[inline]
    pub fn expiry_delta(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => {
                if spot > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionKind::Put => {
                if spot < strike {
                    -1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(PricingError::invalid(
                "kind",
                format!("unrecognised option kind '{}', expected call or put", other),
            )),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

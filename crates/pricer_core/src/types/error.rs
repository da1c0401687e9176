//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Argument errors raised before any computation starts
//!
//! Degenerate inputs (zero maturity, zero volatility) are not errors; the
//! pricers resolve them to an all-zero result.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidArgument`: A parameter failed validation (non-positive spot or
///   strike, unknown option kind, zero step or path count)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid("spot", "must be positive, got -1");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument 'spot': must be positive, got -1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid argument with parameter name and reason.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Description of why the value was rejected.
        reason: String,
    },
}

impl PricingError {
    /// Shorthand for building an [`PricingError::InvalidArgument`].
    #[inline]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PricingError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            PricingError::InvalidArgument { name, .. } => name,
        }
    }
}

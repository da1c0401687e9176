//! Error types for the simulation engine.
//!
//! - [`ConfigError`]: rejected [`SimulationConfig`](super::SimulationConfig)
//!   values, raised by the builder
//! - [`SimulationError`]: everything a simulation call can fail with

use std::time::Duration;

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the simulation engine.
///
/// These errors occur during construction when invalid parameters are
/// provided. Only zero counts are rejected; upper bounds belong to the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count of zero.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),
    /// Step count of zero.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Failure of a simulation call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SimulationError {
    /// Contract terms or simulation sizes failed validation.
    #[error(transparent)]
    Pricing(#[from] PricingError),
    /// The simulation configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The configured wall-clock budget ran out before every path finished.
    #[error("Simulation exceeded its deadline of {budget:?} after {completed} of {total} paths")]
    DeadlineExceeded {
        /// Budget that was configured.
        budget: Duration,
        /// Paths fully replayed before the check failed.
        completed: usize,
        /// Paths requested.
        total: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(0);
        assert!(err.to_string().contains("Invalid step count 0"));

        let err = ConfigError::InvalidParameter {
            name: "display_limit",
            value: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("display_limit"));
    }

    #[test]
    fn test_simulation_error_from_pricing_error() {
        let err: SimulationError = PricingError::invalid("spot", "must be positive").into();
        assert!(matches!(err, SimulationError::Pricing(_)));
        assert_eq!(err.to_string(), "Invalid argument 'spot': must be positive");
    }

    #[test]
    fn test_simulation_error_from_config_error() {
        let err: SimulationError = ConfigError::InvalidStepCount(0).into();
        assert!(matches!(err, SimulationError::Config(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_deadline_display() {
        let err = SimulationError::DeadlineExceeded {
            budget: Duration::from_millis(250),
            completed: 10,
            total: 100,
        };
        let message = err.to_string();
        assert!(message.contains("250ms"));
        assert!(message.contains("10 of 100"));
    }
}

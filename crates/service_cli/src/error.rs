//! CLI error types.

use pricer_core::types::PricingError;
use pricer_pricing::mc::SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the user by `options-cli`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contract terms or sizes were rejected by the pricer.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The hedge simulation failed or ran out of time.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// A request exceeded a configured upper bound.
    #[error("{name} = {value} exceeds the configured maximum of {max}")]
    LimitExceeded {
        /// Parameter name.
        name: &'static str,
        /// Requested value.
        value: usize,
        /// Configured bound.
        max: usize,
    },

    /// JSON encoding failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// The rayon global pool could not be built.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

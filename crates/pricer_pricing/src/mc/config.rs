//! Simulation configuration.
//!
//! This module provides the validated configuration for Monte Carlo path
//! generation and hedge replay.

use std::time::Duration;

use super::error::ConfigError;

/// Number of paths whose trajectories are kept for display by default.
pub const DEFAULT_DISPLAY_LIMIT: usize = 50;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// Counts are only checked for being non-zero. The cost of a simulation is
/// O(n_paths · n_steps) and the engine does not cap either; callers exposing
/// the engine to untrusted input must bound them, and may set a
/// [`deadline`](SimulationConfigBuilder::deadline).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.display_limit(), 50);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps (rebalancing dates) per path.
    n_steps: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Number of leading paths whose trajectories are returned.
    display_limit: usize,
    /// Optional wall-clock budget.
    deadline: Option<Duration>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the requested display subset size.
    ///
    /// The effective subset is `min(display_limit, n_paths)`.
    #[inline]
    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Returns the optional wall-clock budget.
    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0
    /// - `n_steps` is 0
    /// - `display_limit` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if self.display_limit == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "display_limit",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API for constructing simulation configurations
/// with validation at build time.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(1_000)
///     .n_steps(52)  // Weekly rebalancing for 1 year
///     .seed(12345)
///     .display_limit(10)
///     .deadline(Duration::from_secs(5))
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.deadline(), Some(Duration::from_secs(5)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
    display_limit: Option<usize>,
    deadline: Option<Duration>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets how many leading paths keep their full trajectories.
    ///
    /// Defaults to [`DEFAULT_DISPLAY_LIMIT`].
    #[inline]
    pub fn display_limit(mut self, display_limit: usize) -> Self {
        self.display_limit = Some(display_limit);
        self
    }

    /// Sets a wall-clock budget for hedge replay.
    #[inline]
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` not set or zero
    /// - `n_steps` not set or zero
    /// - `display_limit` set to zero
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_paths,
            n_steps,
            seed: self.seed,
            display_limit: self.display_limit.unwrap_or(DEFAULT_DISPLAY_LIMIT),
            deadline: self.deadline,
        };

        config.validate()?;
        Ok(config)
    }
}

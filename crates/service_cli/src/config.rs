//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags. The configuration carries the upper bounds this caller
//! enforces before handing work to the pricing core.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::error::{CliError, Result as CliResult};

/// Environment variable names, in one place.
pub mod env {
    /// Log level (trace, debug, info, warn, error).
    pub const LOG_LEVEL: &str = "OPTIONS_LOG_LEVEL";
    /// Maximum lattice steps.
    pub const MAX_LATTICE_STEPS: &str = "OPTIONS_MAX_LATTICE_STEPS";
    /// Maximum Monte Carlo paths.
    pub const MAX_PATHS: &str = "OPTIONS_MAX_PATHS";
    /// Maximum hedge rebalancing steps.
    pub const MAX_STEPS: &str = "OPTIONS_MAX_STEPS";
    /// Maximum simulated prices (paths x (steps + 1)) per hedge run.
    pub const MAX_PATH_POINTS: &str = "OPTIONS_MAX_PATH_POINTS";
    /// Maximum trajectories reported per hedge run.
    pub const MAX_DISPLAY_PATHS: &str = "OPTIONS_MAX_DISPLAY_PATHS";
    /// Hedge deadline in seconds (0 disables it).
    pub const DEADLINE_SECS: &str = "OPTIONS_DEADLINE_SECS";
    /// Rayon worker threads.
    pub const THREADS: &str = "OPTIONS_THREADS";
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable {name}={value}: {reason}")]
    EnvError {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Largest accepted lattice step count
    pub max_lattice_steps: usize,
    /// Largest accepted Monte Carlo path count
    pub max_paths: usize,
    /// Largest accepted hedge rebalancing step count
    pub max_steps: usize,
    /// Largest accepted paths x (steps + 1); bounds the dense path set
    pub max_path_points: usize,
    /// Largest accepted number of reported trajectories
    pub max_display_paths: usize,
    /// Hedge simulation deadline in seconds; 0 disables it
    pub deadline_secs: u64,
    /// Paths whose trajectories are included in hedge output
    pub display_paths: usize,
    /// Rayon worker threads; rayon's default when unset
    pub threads: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            max_lattice_steps: 5_000,
            max_paths: 1_000_000,
            max_steps: 10_000,
            max_path_points: 50_000_000,
            max_display_paths: 1_000,
            deadline_secs: 60,
            display_paths: 50,
            threads: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file, on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Override fields from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&value)?;
        }
        if let Some(value) = lookup(env::MAX_LATTICE_STEPS) {
            self.max_lattice_steps = parse_env(env::MAX_LATTICE_STEPS, &value)?;
        }
        if let Some(value) = lookup(env::MAX_PATHS) {
            self.max_paths = parse_env(env::MAX_PATHS, &value)?;
        }
        if let Some(value) = lookup(env::MAX_STEPS) {
            self.max_steps = parse_env(env::MAX_STEPS, &value)?;
        }
        if let Some(value) = lookup(env::MAX_PATH_POINTS) {
            self.max_path_points = parse_env(env::MAX_PATH_POINTS, &value)?;
        }
        if let Some(value) = lookup(env::MAX_DISPLAY_PATHS) {
            self.max_display_paths = parse_env(env::MAX_DISPLAY_PATHS, &value)?;
        }
        if let Some(value) = lookup(env::DEADLINE_SECS) {
            self.deadline_secs = parse_env(env::DEADLINE_SECS, &value)?;
        }
        if let Some(value) = lookup(env::THREADS) {
            self.threads = Some(parse_env(env::THREADS, &value)?);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(threads) = cli.threads {
            self.threads = Some(threads);
        }
        if let Some(deadline_secs) = cli.deadline_secs {
            self.deadline_secs = deadline_secs;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_lattice_steps", self.max_lattice_steps),
            ("max_paths", self.max_paths),
            ("max_steps", self.max_steps),
            ("max_path_points", self.max_path_points),
            ("max_display_paths", self.max_display_paths),
            ("display_paths", self.display_paths),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    name,
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        if self.display_paths > self.max_display_paths {
            return Err(ConfigError::InvalidValue {
                name: "display_paths",
                reason: format!(
                    "{} exceeds max_display_paths {}",
                    self.display_paths, self.max_display_paths
                ),
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidValue {
                name: "threads",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Hedge deadline, if enabled
    pub fn deadline(&self) -> Option<Duration> {
        (self.deadline_secs > 0).then(|| Duration::from_secs(self.deadline_secs))
    }

    /// Rejects a lattice step count above the configured bound
    pub fn check_lattice_steps(&self, steps: usize) -> CliResult<()> {
        check_limit("steps", steps, self.max_lattice_steps)
    }

    /// Rejects a path count above the configured bound
    pub fn check_paths(&self, paths: usize) -> CliResult<()> {
        check_limit("paths", paths, self.max_paths)
    }

    /// Rejects a hedge step count above the configured bound
    pub fn check_steps(&self, steps: usize) -> CliResult<()> {
        check_limit("steps", steps, self.max_steps)
    }

    /// Rejects a hedge run whose dense path set would exceed the configured
    /// number of simulated prices
    pub fn check_path_points(&self, paths: usize, steps: usize) -> CliResult<()> {
        let points = paths.saturating_mul(steps.saturating_add(1));
        check_limit("path_points", points, self.max_path_points)
    }

    /// Rejects a trajectory count above the configured bound
    pub fn check_display(&self, display: usize) -> CliResult<()> {
        check_limit("display", display, self.max_display_paths)
    }
}

fn parse_env<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvError {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn check_limit(name: &'static str, value: usize, max: usize) -> CliResult<()> {
    if value > max {
        tracing::warn!(parameter = name, value, max, "request exceeds configured bound");
        return Err(CliError::LimitExceeded { name, value, max });
    }
    Ok(())
}

/// Configuration values taken from command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<std::path::PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Thread count override
    pub threads: Option<usize>,
    /// Deadline override in seconds
    pub deadline_secs: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

//! Monte Carlo simulation engine.
//!
//! This module provides GBM path generation and the discrete delta-hedging
//! simulator built on it.
//!
//! # Architecture
//!
//! ```text
//! HedgeSimulator
//! ├── SimulationConfig   (paths, steps, seed, display subset, deadline)
//! ├── PricerRng          (injected random source)
//! └── Orchestration
//!     ├── generate_gbm_paths()   (parallel over paths)
//!     ├── per-path hedge replay  (parallel over paths)
//!     └── statistics reduction   (mean, std, 5th percentile)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{ContractSpec, OptionKind};
//! use pricer_pricing::mc::{HedgeSimulator, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(1_000)
//!     .n_steps(52)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let spec = ContractSpec::new(100.0, 105.0, 0.5, 0.03, 0.25, OptionKind::Put);
//! let result = HedgeSimulator::new(config).run(&spec).unwrap();
//! println!(
//!     "mean {:.4} std {:.4} VaR95 {:.4}",
//!     result.statistics.mean_error, result.statistics.std_error, result.statistics.var_95
//! );
//! ```

pub mod config;
pub mod error;
pub mod hedge;
pub mod paths;

// Re-exports for convenient access
pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_DISPLAY_LIMIT};
pub use error::{ConfigError, SimulationError};
pub use hedge::{HedgeResult, HedgeSimulator, HedgeStatistics, EXPIRY_THRESHOLD};
pub use paths::{generate_gbm_paths, GbmParams, PricePathSet};

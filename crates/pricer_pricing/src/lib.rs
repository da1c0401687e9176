//! # Pricer Engine (Layer 3: Simulation)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the stochastic engine of the workspace:
//! - Seeded, injectable random sources ([`rng`])
//! - GBM path generation, parallel across paths ([`mc::generate_gbm_paths`])
//! - Discrete delta-hedging simulation with hedging-error statistics
//!   ([`mc::HedgeSimulator`])
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): contract terms, errors, sample statistics
//! - Layer 2 (pricer_models): Black-Scholes delta used at every rebalance
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::mc::{generate_gbm_paths, GbmParams};
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let paths = generate_gbm_paths(GbmParams::default(), 252, 100, &mut rng).unwrap();
//! assert_eq!(paths.n_paths(), 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    generate_gbm_paths, GbmParams, HedgeResult, HedgeSimulator, HedgeStatistics, PricePathSet,
    SimulationConfig, SimulationError,
};
pub use rng::PricerRng;

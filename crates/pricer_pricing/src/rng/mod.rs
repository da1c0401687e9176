//! # Random Number Generation
//!
//! Seeded random sources for Monte Carlo simulation.
//!
//! ## Design Rationale
//!
//! - **Injectable**: every simulation takes a `&mut PricerRng` from the
//!   caller; nothing in the engine reaches for a global generator
//! - **Reproducibility**: a seeded generator yields the same paths on every
//!   run, independent of thread count
//! - **Parallel streams**: [`PricerRng::split_seeds`] derives one child seed
//!   per path from the parent sequence, so parallel work stays deterministic
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Standard normal variates (mean=0, std=1)
//! let z = rng.gen_normal();
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;

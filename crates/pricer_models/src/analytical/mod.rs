//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes solution:
//! - Price for calls and puts
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho) in reporting units

pub mod black_scholes;

pub use black_scholes::{black_scholes, evaluate, evaluate_delta, PricingResult};

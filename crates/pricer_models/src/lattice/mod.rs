//! Binomial lattice pricing.
//!
//! - [`CrrLattice`]: reusable Cox-Ross-Rubinstein lattice with arena storage
//! - [`crr_price`], [`crr_delta`]: one-off wrappers

pub mod crr;

pub use crr::{crr_delta, crr_price, CrrLattice, LatticeResult, LatticeTree};

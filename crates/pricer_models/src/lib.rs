//! # Pricer Models (L2: Business Logic)
//!
//! Pricing models for European vanilla options.
//!
//! This crate provides:
//! - Closed-form Black-Scholes price and Greeks
//! - Cox-Ross-Rubinstein binomial lattice with optional tree capture
//!
//! ## Design Principles
//!
//! - **Shared degenerate rule**: T ≤ 0 or σ ≤ 0 yields an all-zero result in
//!   every model
//! - **Validate once**: public entry points validate [`ContractSpec`]; the
//!   `evaluate` variants assume validated input for hot loops
//! - **Arena reuse**: the lattice keeps its node storage between calls
//!
//! [`ContractSpec`]: pricer_core::types::ContractSpec

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;

//! # pricer_core: Foundation Types for Vanilla Option Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Contract terms: `OptionKind`, `ContractSpec` (`types`)
//! - Error types: `PricingError` (`types::error`)
//! - Standard normal distribution: `norm_cdf`, `norm_pdf` (`math::distributions`)
//! - Sample statistics for simulation output (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{ContractSpec, OptionKind};
//!
//! let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
//! assert!(spec.validate().is_ok());
//! assert!(!spec.is_degenerate());
//!
//! let half = norm_cdf(0.0_f64);
//! # assert!((half - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionKind` and `ContractSpec`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

//! Contract and error types.
//!
//! This module provides:
//! - `option_kind`: The closed Call/Put discriminant
//! - `contract`: `ContractSpec`, the contract terms every pricer consumes
//! - `error`: Structured error types for argument validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionKind`] from `option_kind`
//! - [`ContractSpec`] from `contract`
//! - [`PricingError`] from `error`

pub mod contract;
pub mod error;
pub mod option_kind;

pub use contract::ContractSpec;
pub use error::PricingError;
pub use option_kind::OptionKind;

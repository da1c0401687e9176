//! # Pricer Risk (L4: Application)
//!
//! Deterministic stress testing of vanilla options.
//!
//! This crate provides:
//! - The standard five-scenario spot/volatility shock grid
//! - Custom shock scenarios
//! - Repricing through the closed-form Black-Scholes model with P&L against
//!   the unshocked price
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  scenarios/  - presets, ShockScenario,  │
//! │                ScenarioEngine           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes price and Greeks         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{ContractSpec, OptionKind};
//! use pricer_risk::scenarios::stress_test;
//!
//! let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
//! let results = stress_test(&spec).unwrap();
//!
//! assert_eq!(results.len(), 5);
//! assert_eq!(results[2].name, "Base Case");
//! assert_eq!(results[2].pnl, 0.0);
//! assert!(results[0].pnl < 0.0); // a crash hurts a long call
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenarios;

//! CLI command implementations
//!
//! Each submodule implements one subcommand. Commands return the rendered
//! output; `main` decides where it goes.

use clap::Args;
use pricer_core::types::{ContractSpec, OptionKind};

pub mod hedge;
pub mod lattice;
pub mod price;
pub mod stress;

/// Contract terms shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price
    #[arg(short = 'k', long, default_value_t = 100.0)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(short = 't', long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(short = 'v', long, default_value_t = 0.2)]
    pub volatility: f64,

    /// Option kind (call or put)
    #[arg(long, default_value = "call")]
    pub kind: OptionKind,
}

impl ContractArgs {
    /// Contract described by the flags.
    pub fn to_spec(&self) -> ContractSpec {
        ContractSpec::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            self.kind,
        )
    }
}

impl Default for ContractArgs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            kind: OptionKind::Call,
        }
    }
}

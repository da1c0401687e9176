//! Price command implementation
//!
//! Closed-form Black-Scholes price and Greeks for one contract.

use std::time::Instant;

use pricer_core::types::ContractSpec;
use pricer_models::analytical::{black_scholes, PricingResult};
use serde::Serialize;
use tracing::{debug, info};

use crate::output::{number, to_json, OutputFormat, Table};
use crate::Result;

/// Report printed by `options-cli price`.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    /// Contract as priced
    pub contract: ContractSpec,
    /// Price and reported Greeks
    pub result: PricingResult,
}

/// Run the price command
pub fn run(spec: &ContractSpec, format: OutputFormat) -> Result<String> {
    info!(
        spot = spec.spot,
        strike = spec.strike,
        maturity = spec.maturity,
        rate = spec.rate,
        volatility = spec.volatility,
        kind = %spec.kind,
        "Pricing with Black-Scholes"
    );

    let start = Instant::now();
    let result = black_scholes(spec)?;
    debug!(elapsed_us = start.elapsed().as_micros() as u64, "Black-Scholes evaluated");

    let report = PriceReport {
        contract: *spec,
        result,
    };
    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Table => Ok(render_table(&report)),
    }
}

fn render_table(report: &PriceReport) -> String {
    let r = &report.result;
    let mut table = Table::new(["Measure", "Value"]);
    table
        .row(["Price".to_string(), number(r.price, 4)])
        .row(["Delta".to_string(), number(r.delta, 4)])
        .row(["Gamma".to_string(), number(r.gamma, 6)])
        .row(["Vega (per 1%)".to_string(), number(r.vega, 4)])
        .row(["Theta (per day)".to_string(), number(r.theta, 4)])
        .row(["Rho (per 1%)".to_string(), number(r.rho, 4)]);
    format!(
        "Black-Scholes {} S={} K={} T={} r={} σ={}\n{}",
        report.contract.kind,
        report.contract.spot,
        report.contract.strike,
        report.contract.maturity,
        report.contract.rate,
        report.contract.volatility,
        table
    )
}

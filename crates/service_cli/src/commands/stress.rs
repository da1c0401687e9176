//! Stress command implementation
//!
//! Reprices a contract under the preset spot/volatility grid plus any
//! custom scenarios given on the command line.

use pricer_core::types::{ContractSpec, PricingError};
use pricer_models::analytical::evaluate;
use pricer_risk::scenarios::{ScenarioEngine, ScenarioResult, ShockScenario};
use serde::Serialize;
use tracing::{debug, info};

use crate::output::{number, to_json, OutputFormat, Table};
use crate::Result;

/// Parses `NAME:SPOT_SHOCK:VOL_SHOCK`, shocks given as fractions.
pub fn parse_scenario(value: &str) -> std::result::Result<ShockScenario, PricingError> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(vol), Some(spot), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PricingError::invalid(
            "scenario",
            format!("expected NAME:SPOT_SHOCK:VOL_SHOCK, got '{}'", value),
        ));
    };
    let shock = |field: &'static str, text: &str| {
        text.trim()
            .parse::<f64>()
            .map_err(|e| PricingError::invalid(field, format!("'{}': {}", text, e)))
    };
    ShockScenario::new(name.trim(), shock("spot_shock", spot)?, shock("vol_shock", vol)?)
}

/// Report printed by `options-cli stress`.
#[derive(Debug, Serialize)]
pub struct StressReport {
    /// Contract stressed
    pub contract: ContractSpec,
    /// Unshocked price
    pub base_price: f64,
    /// One entry per scenario, in execution order
    pub scenarios: Vec<ScenarioResult>,
    /// Name of the scenario with the lowest P&L
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_case: Option<String>,
}

/// Run the stress command
pub fn run(spec: &ContractSpec, custom: &[ShockScenario], format: OutputFormat) -> Result<String> {
    let mut engine = ScenarioEngine::standard();
    for scenario in custom {
        engine.add_scenario(scenario.clone());
    }
    info!(
        scenarios = engine.scenario_count(),
        custom = custom.len(),
        kind = %spec.kind,
        "Running stress test"
    );

    let scenarios = engine.execute(spec)?;
    let worst_case = ScenarioEngine::worst_case(&scenarios).map(|r| r.name.clone());
    debug!(worst_case = ?worst_case, "Stress test finished");

    let report = StressReport {
        contract: *spec,
        base_price: evaluate(spec).price,
        scenarios,
        worst_case,
    };
    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Table => Ok(render_table(&report)),
    }
}

fn percent(fraction: f64) -> String {
    format!("{:+.0}%", fraction * 100.0)
}

fn render_table(report: &StressReport) -> String {
    let mut table = Table::new(["Scenario", "Spot", "Vol", "S'", "σ'", "Price", "P&L"]);
    for r in &report.scenarios {
        table.row([
            r.name.clone(),
            percent(r.spot_shock),
            percent(r.vol_shock),
            number(r.spot, 2),
            number(r.volatility, 4),
            number(r.price, 4),
            number(r.pnl, 4),
        ]);
    }
    let mut out = format!(
        "Stress test {} S={} K={} T={} (base price {})\n{}",
        report.contract.kind,
        report.contract.spot,
        report.contract.strike,
        report.contract.maturity,
        number(report.base_price, 4),
        table
    );
    if let Some(worst) = &report.worst_case {
        out.push_str(&format!("Worst case: {}\n", worst));
    }
    out
}

//! Lattice command implementation
//!
//! Cox-Ross-Rubinstein valuation, optionally with the node tree and the
//! finite-difference lattice delta.

use std::time::Instant;

use pricer_core::types::ContractSpec;
use pricer_models::analytical::evaluate;
use pricer_models::lattice::{CrrLattice, LatticeResult, LatticeTree};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{number, to_json, OutputFormat, Table};
use crate::Result;

/// Largest tree printed in table form; JSON output is never truncated.
pub const TREE_TABLE_MAX_STEPS: usize = 10;

/// Options of `options-cli lattice`.
#[derive(Debug, Clone, Copy)]
pub struct LatticeOptions {
    /// Number of time steps
    pub steps: usize,
    /// Include node values
    pub tree: bool,
    /// Include the lattice delta
    pub delta: bool,
}

/// Report printed by `options-cli lattice`.
#[derive(Debug, Serialize)]
pub struct LatticeReport {
    /// Contract as priced
    pub contract: ContractSpec,
    /// Time steps used
    pub steps: usize,
    /// Lattice valuation
    pub result: LatticeResult,
    /// Lattice delta, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    /// Closed-form price of the same contract
    pub black_scholes_price: f64,
}

/// Run the lattice command
pub fn run(
    spec: &ContractSpec,
    options: LatticeOptions,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<String> {
    config.check_lattice_steps(options.steps)?;
    info!(
        steps = options.steps,
        tree = options.tree,
        delta = options.delta,
        kind = %spec.kind,
        "Pricing with CRR lattice"
    );

    let start = Instant::now();
    let mut lattice = CrrLattice::with_capacity(options.steps);
    let result = if options.tree {
        lattice.price_with_tree(spec, options.steps)?
    } else {
        lattice.price(spec, options.steps)?
    };
    let delta = if options.delta {
        Some(lattice.delta(spec, options.steps)?)
    } else {
        None
    };
    debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        price = result.price,
        "Lattice evaluated"
    );

    let report = LatticeReport {
        contract: *spec,
        steps: options.steps,
        black_scholes_price: evaluate(spec).price,
        result,
        delta,
    };
    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Table => Ok(render_table(&report)),
    }
}

fn render_table(report: &LatticeReport) -> String {
    let r = &report.result;
    let mut table = Table::new(["Measure", "Value"]);
    table
        .row(["Price".to_string(), number(r.price, 4)])
        .row(["Black-Scholes".to_string(), number(report.black_scholes_price, 4)])
        .row([
            "Difference".to_string(),
            number(r.price - report.black_scholes_price, 6),
        ])
        .row(["Up factor".to_string(), number(r.up, 6)])
        .row(["Down factor".to_string(), number(r.down, 6)])
        .row(["Up probability".to_string(), number(r.probability, 6)]);
    if let Some(delta) = report.delta {
        table.row(["Delta".to_string(), number(delta, 4)]);
    }

    let mut out = format!(
        "CRR lattice {} steps, {} S={} K={} T={}\n{}",
        report.steps,
        report.contract.kind,
        report.contract.spot,
        report.contract.strike,
        report.contract.maturity,
        table
    );
    if let Some(tree) = &r.tree {
        if tree.steps <= TREE_TABLE_MAX_STEPS {
            out.push_str(&render_tree(tree).render());
        } else {
            out.push_str(&format!(
                "Tree has {} steps; use --format json to see all nodes\n",
                tree.steps
            ));
        }
    }
    out
}

/// One row per node: step, node, underlying and option value.
fn render_tree(tree: &LatticeTree) -> Table {
    let mut table = Table::new(["Step", "Node", "Underlying", "Option"]);
    for (step, (spots, values)) in tree.underlying.iter().zip(&tree.option_values).enumerate() {
        for (node, (spot, value)) in spots.iter().zip(values).enumerate() {
            table.row([
                step.to_string(),
                node.to_string(),
                number(*spot, 4),
                number(*value, 4),
            ]);
        }
    }
    table
}

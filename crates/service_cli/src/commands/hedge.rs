//! Hedge command implementation
//!
//! Monte Carlo simulation of a discretely rebalanced delta hedge.

use std::time::Instant;

use pricer_core::types::ContractSpec;
use pricer_pricing::mc::{
    HedgeResult, HedgeSimulator, HedgeStatistics, SimulationConfig, SimulationError,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{number, to_json, OutputFormat, Table};
use crate::Result;

/// Display paths listed individually in table form.
pub const TABLE_PATH_ROWS: usize = 10;

/// Options of `options-cli hedge`.
#[derive(Debug, Clone, Copy)]
pub struct HedgeOptions {
    /// Number of simulated paths
    pub paths: usize,
    /// Number of rebalancing steps
    pub steps: usize,
    /// Random seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Trajectories to report; the configured default when absent
    pub display: Option<usize>,
}

/// Trajectory of one displayed path.
#[derive(Debug, Serialize)]
pub struct PathReport {
    /// Underlying price per step
    pub prices: Vec<f64>,
    /// Hedge ratio per step
    pub deltas: Vec<f64>,
    /// Cash account per step
    pub cash: Vec<f64>,
    /// Portfolio value per step
    pub portfolio: Vec<f64>,
    /// Terminal hedging error
    pub hedging_error: f64,
}

/// Report printed by `options-cli hedge`.
#[derive(Debug, Serialize)]
pub struct HedgeReport {
    /// Contract hedged
    pub contract: ContractSpec,
    /// Seed that reproduces the run
    pub seed: u64,
    /// Simulated paths
    pub n_paths: usize,
    /// Rebalancing steps
    pub n_steps: usize,
    /// Premium received at t = 0
    pub initial_price: f64,
    /// Hedging-error statistics over every path
    pub statistics: HedgeStatistics,
    /// Rebalancing times
    pub time_grid: Vec<f64>,
    /// Trajectories of the display subset
    pub paths: Vec<PathReport>,
}

impl HedgeReport {
    fn new(contract: ContractSpec, seed: u64, n_paths: usize, result: HedgeResult) -> Self {
        let paths = (0..result.display_paths)
            .map(|path| PathReport {
                prices: result.prices.path(path).to_vec(),
                deltas: result.deltas.path(path).to_vec(),
                cash: result.cash.path(path).to_vec(),
                portfolio: result.portfolio.path(path).to_vec(),
                hedging_error: result.hedging_errors[path],
            })
            .collect();
        Self {
            contract,
            seed,
            n_paths,
            n_steps: result.time_grid.len().saturating_sub(1),
            initial_price: result.initial_price,
            statistics: result.statistics,
            time_grid: result.time_grid,
            paths,
        }
    }
}

/// Run the hedge command
pub fn run(
    spec: &ContractSpec,
    options: HedgeOptions,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<String> {
    config.check_paths(options.paths)?;
    config.check_steps(options.steps)?;
    config.check_path_points(options.paths, options.steps)?;
    let display = options.display.unwrap_or(config.display_paths);
    config.check_display(display)?;

    let mut builder = SimulationConfig::builder()
        .n_paths(options.paths)
        .n_steps(options.steps)
        .display_limit(display);
    if let Some(seed) = options.seed {
        builder = builder.seed(seed);
    }
    if let Some(deadline) = config.deadline() {
        builder = builder.deadline(deadline);
    }
    let simulator = HedgeSimulator::new(builder.build().map_err(SimulationError::from)?);

    let mut rng = simulator.rng();
    info!(
        paths = options.paths,
        steps = options.steps,
        seed = rng.seed(),
        kind = %spec.kind,
        "Running delta-hedge simulation"
    );

    let start = Instant::now();
    let result = simulator.simulate(spec, &mut rng)?;
    debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        mean_error = result.statistics.mean_error,
        std_error = result.statistics.std_error,
        "Hedge simulation finished"
    );

    let report = HedgeReport::new(*spec, rng.seed(), options.paths, result);
    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Table => Ok(render_table(&report)),
    }
}

fn render_table(report: &HedgeReport) -> String {
    let s = &report.statistics;
    let mut summary = Table::new(["Measure", "Value"]);
    summary
        .row(["Premium".to_string(), number(report.initial_price, 4)])
        .row(["Mean error".to_string(), number(s.mean_error, 4)])
        .row(["Std error".to_string(), number(s.std_error, 4)])
        .row(["VaR 95% (5th pct)".to_string(), number(s.var_95, 4)]);

    let mut out = format!(
        "Delta hedge {} K={} T={}: {} paths x {} steps (seed {})\n{}",
        report.contract.kind,
        report.contract.strike,
        report.contract.maturity,
        report.n_paths,
        report.n_steps,
        report.seed,
        summary
    );

    if !report.paths.is_empty() {
        let mut paths = Table::new(["Path", "Terminal S", "Final delta", "Portfolio", "Error"]);
        for (index, path) in report.paths.iter().take(TABLE_PATH_ROWS).enumerate() {
            paths.row([
                index.to_string(),
                number(path.prices.last().copied().unwrap_or(f64::NAN), 4),
                number(path.deltas.last().copied().unwrap_or(f64::NAN), 4),
                number(path.portfolio.last().copied().unwrap_or(f64::NAN), 4),
                number(path.hedging_error, 4),
            ]);
        }
        out.push_str(&paths.render());
    }
    out
}

//! options-cli - Command Line Operations for European Option Pricing
//!
//! Operational entry point for the pricing workspace.
//!
//! # Commands
//!
//! - `options-cli price` - Black-Scholes price and Greeks
//! - `options-cli lattice --steps <n>` - Cox-Ross-Rubinstein valuation
//! - `options-cli hedge --paths <n> --steps <n>` - Delta-hedging simulation
//! - `options-cli stress` - Spot/volatility stress grid
//!
//! # Configuration
//!
//! Defaults, then `--config <file>` (TOML), then `OPTIONS_*` environment
//! variables, then command-line flags. `RUST_LOG` overrides the log level.
//!
//! # Architecture
//!
//! As the service layer, this crate validates requests against configured
//! bounds and orchestrates the pricer crates; it holds no pricing logic.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pricer_risk::scenarios::ShockScenario;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::hedge::HedgeOptions;
use commands::lattice::LatticeOptions;
use commands::ContractArgs;
use config::{CliConfig, CliOverrides, LogLevel};
use output::OutputFormat;

/// European option pricing, hedging simulation and stress testing
#[derive(Parser)]
#[command(name = "options-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Worker threads for parallel simulation
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Closed-form Black-Scholes price and Greeks
    Price {
        #[command(flatten)]
        contract: ContractArgs,
    },

    /// Cox-Ross-Rubinstein binomial valuation
    Lattice {
        #[command(flatten)]
        contract: ContractArgs,

        /// Number of time steps
        #[arg(short = 'n', long, default_value_t = 500)]
        steps: usize,

        /// Include node values
        #[arg(long)]
        tree: bool,

        /// Include the finite-difference lattice delta
        #[arg(long)]
        delta: bool,
    },

    /// Monte Carlo simulation of a discrete delta hedge
    Hedge {
        #[command(flatten)]
        contract: ContractArgs,

        /// Number of simulated paths
        #[arg(short, long, default_value_t = 1_000)]
        paths: usize,

        /// Number of rebalancing steps
        #[arg(short = 'n', long, default_value_t = 252)]
        steps: usize,

        /// Random seed (drawn from entropy when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of paths whose trajectories are reported
        #[arg(short, long)]
        display: Option<usize>,

        /// Simulation deadline in seconds (0 disables it)
        #[arg(long)]
        deadline_secs: Option<u64>,
    },

    /// Reprice under the standard spot/volatility stress grid
    Stress {
        #[command(flatten)]
        contract: ContractArgs,

        /// Extra scenario as NAME:SPOT_SHOCK:VOL_SHOCK (fractions), repeatable
        #[arg(long = "scenario", value_parser = commands::stress::parse_scenario)]
        scenarios: Vec<ShockScenario>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let deadline_secs = match &self.command {
            Commands::Hedge { deadline_secs, .. } => *deadline_secs,
            _ => None,
        };
        CliOverrides {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            threads: self.threads,
            deadline_secs,
        }
    }
}

/// Installs the fmt subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn execute(cli: Cli, config: &CliConfig) -> Result<String> {
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        debug!(threads, "Configured global thread pool");
    }

    let format = cli.format;
    match cli.command {
        Commands::Price { contract } => commands::price::run(&contract.to_spec(), format),
        Commands::Lattice {
            contract,
            steps,
            tree,
            delta,
        } => commands::lattice::run(
            &contract.to_spec(),
            LatticeOptions { steps, tree, delta },
            config,
            format,
        ),
        Commands::Hedge {
            contract,
            paths,
            steps,
            seed,
            display,
            ..
        } => commands::hedge::run(
            &contract.to_spec(),
            HedgeOptions {
                paths,
                steps,
                seed,
                display,
            },
            config,
            format,
        ),
        Commands::Stress {
            contract,
            scenarios,
        } => commands::stress::run(&contract.to_spec(), &scenarios, format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::build_config(&cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", CliError::from(e));
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_level);
    debug!(?config, "Configuration loaded");

    match execute(cli, &config) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

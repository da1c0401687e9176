//! Discrete delta-hedging simulation.
//!
//! Sells one option at its Black-Scholes premium, holds Δ units of the
//! underlying financed through a cash account, and rebalances at every step
//! of a simulated GBM path. The terminal gap between the replicating
//! portfolio and the option payoff is the hedging error.
//!
//! # Per-path recurrence
//!
//! ```text
//! t = 0:  cash₀ = premium - Δ₀·S₀,  portfolio₀ = premium
//! t ≥ 1:  Δₜ    = Black-Scholes delta at (Sₜ, T - t·dt), or the expiry rule
//!                 once T - t·dt ≤ 0.001
//!         cashₜ = cashₜ₋₁·e^(r·dt) - (Δₜ - Δₜ₋₁)·Sₜ
//!         portfolioₜ = Δₜ·Sₜ + cashₜ
//! error = portfolio_N - payoff(S_N)
//! ```
//!
//! Paths are replayed in parallel; statistics use every path, while full
//! trajectories are returned only for the leading display subset.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use pricer_core::math::statistics::{mean, percentile, population_std_dev};
use pricer_core::types::ContractSpec;
use pricer_models::analytical::{evaluate, evaluate_delta};
use rayon::prelude::*;

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::paths::{generate_gbm_paths, GbmParams, PricePathSet};
use crate::rng::PricerRng;

/// Remaining time (years) at or below which the expiry delta rule applies.
pub const EXPIRY_THRESHOLD: f64 = 0.001;

/// Percentile of the hedging-error distribution reported as the VaR proxy.
pub const VAR_PERCENTILE: f64 = 5.0;

/// Aggregate hedging-error statistics over every simulated path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeStatistics {
    /// Mean terminal hedging error.
    pub mean_error: f64,
    /// Population standard deviation of the terminal hedging error.
    pub std_error: f64,
    /// 5th percentile of the terminal hedging error (linear interpolation).
    pub var_95: f64,
}

impl HedgeStatistics {
    fn from_errors(errors: &[f64]) -> Self {
        Self {
            mean_error: mean(errors).unwrap_or(0.0),
            std_error: population_std_dev(errors).unwrap_or(0.0),
            var_95: percentile(errors, VAR_PERCENTILE).unwrap_or(0.0),
        }
    }
}

/// Output of [`HedgeSimulator::simulate`].
///
/// The trajectory sets (`prices`, `deltas`, `cash`, `portfolio`) hold the
/// first `display_paths` paths only; `hedging_errors` and `statistics`
/// cover every path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeResult {
    /// Black-Scholes premium received at t = 0.
    pub initial_price: f64,
    /// `n_steps + 1` evenly spaced times from 0 to T.
    pub time_grid: Vec<f64>,
    /// Number of paths in the trajectory sets.
    pub display_paths: usize,
    /// Simulated underlying prices.
    pub prices: PricePathSet,
    /// Hedge ratio held after rebalancing at each step.
    pub deltas: PricePathSet,
    /// Cash account after rebalancing at each step.
    pub cash: PricePathSet,
    /// Replicating portfolio value at each step.
    pub portfolio: PricePathSet,
    /// Terminal hedging error of every path.
    pub hedging_errors: Vec<f64>,
    /// Aggregates over `hedging_errors`.
    pub statistics: HedgeStatistics,
}

/// Per-run constants shared by every path.
#[derive(Clone, Copy, Debug)]
struct HedgePlan {
    spec: ContractSpec,
    dt: f64,
    growth: f64,
    premium: f64,
    initial_delta: f64,
}

impl HedgePlan {
    fn new(spec: &ContractSpec, n_steps: usize) -> Self {
        let dt = spec.maturity / n_steps as f64;
        let initial = evaluate(spec);
        Self {
            spec: *spec,
            dt,
            growth: (spec.rate * dt).exp(),
            premium: initial.price,
            initial_delta: initial.delta,
        }
    }

    /// Hedge ratio at `step` for underlying `spot`.
    #[inline]
    fn delta_at(&self, step: usize, spot: f64) -> f64 {
        let remaining = self.spec.maturity - step as f64 * self.dt;
        if remaining > EXPIRY_THRESHOLD {
            let delta = evaluate_delta(&self.spec.with_spot(spot).with_maturity(remaining));
            if delta.is_finite() {
                return delta;
            }
        }
        self.spec.kind.expiry_delta(spot, self.spec.strike)
    }

    /// Replays one path and returns its terminal hedging error.
    ///
    /// `record(step, delta, cash, portfolio)` sees every step including 0.
    #[inline]
    fn replay<F>(&self, prices: &[f64], mut record: F) -> f64
    where
        F: FnMut(usize, f64, f64, f64),
    {
        let mut delta = self.initial_delta;
        let mut cash = self.premium - delta * prices[0];
        let mut portfolio = delta * prices[0] + cash;
        record(0, delta, cash, portfolio);

        for (step, &spot) in prices.iter().enumerate().skip(1) {
            let next_delta = self.delta_at(step, spot);
            cash = cash * self.growth - (next_delta - delta) * spot;
            delta = next_delta;
            portfolio = delta * spot + cash;
            record(step, delta, cash, portfolio);
        }

        let terminal = prices[prices.len() - 1];
        portfolio - self.spec.kind.payoff(terminal, self.spec.strike)
    }
}

/// Monte Carlo delta-hedging simulator.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ContractSpec, OptionKind};
/// use pricer_pricing::mc::{HedgeSimulator, SimulationConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// let config = SimulationConfig::builder()
///     .n_paths(2_000)
///     .n_steps(52)
///     .build()
///     .unwrap();
/// let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
///
/// let mut rng = PricerRng::from_seed(42);
/// let result = HedgeSimulator::new(config).simulate(&spec, &mut rng).unwrap();
///
/// assert_eq!(result.hedging_errors.len(), 2_000);
/// assert_eq!(result.display_paths, 50);
/// assert!(result.statistics.std_error < 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct HedgeSimulator {
    config: SimulationConfig,
}

impl HedgeSimulator {
    /// Creates a simulator for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Creates the random source described by the configuration: seeded if
    /// a seed is set, otherwise from operating-system entropy.
    pub fn rng(&self) -> PricerRng {
        match self.config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        }
    }

    /// Runs the simulation with the configuration's own random source.
    ///
    /// # Errors
    /// Same as [`HedgeSimulator::simulate`].
    pub fn run(&self, spec: &ContractSpec) -> Result<HedgeResult, SimulationError> {
        let mut rng = self.rng();
        self.simulate(spec, &mut rng)
    }

    /// Simulates the hedge on `n_paths` GBM paths drawn from `rng`.
    ///
    /// # Errors
    ///
    /// - `SimulationError::Pricing` if the contract fails validation or has
    ///   a negative maturity or volatility
    /// - `SimulationError::Config` if the configuration is invalid
    /// - `SimulationError::DeadlineExceeded` if a deadline is configured
    ///   and runs out
    pub fn simulate(
        &self,
        spec: &ContractSpec,
        rng: &mut PricerRng,
    ) -> Result<HedgeResult, SimulationError> {
        let started = Instant::now();
        self.config.validate()?;
        spec.validate()?;

        let n_steps = self.config.n_steps();
        let n_paths = self.config.n_paths();
        let prices = generate_gbm_paths(GbmParams::from(spec), n_steps, n_paths, rng)?;
        self.check_deadline(started, 0)?;

        let plan = HedgePlan::new(spec, n_steps);
        let completed = AtomicUsize::new(0);
        let hedging_errors = (0..n_paths)
            .into_par_iter()
            .map(|path| {
                self.check_deadline(started, completed.load(Ordering::Relaxed))?;
                let error = plan.replay(prices.path(path), |_, _, _, _| {});
                completed.fetch_add(1, Ordering::Relaxed);
                Ok(error)
            })
            .collect::<Result<Vec<f64>, SimulationError>>()?;

        // Trajectories are recorded by a second replay of the display subset
        let display_paths = self.config.display_limit().min(n_paths);
        let mut deltas = PricePathSet::zeros(display_paths, n_steps);
        let mut cash = PricePathSet::zeros(display_paths, n_steps);
        let mut portfolio = PricePathSet::zeros(display_paths, n_steps);
        for path in 0..display_paths {
            let (delta_row, cash_row, portfolio_row) = (
                deltas.path_mut(path),
                cash.path_mut(path),
                portfolio.path_mut(path),
            );
            plan.replay(prices.path(path), |step, d, c, v| {
                delta_row[step] = d;
                cash_row[step] = c;
                portfolio_row[step] = v;
            });
        }

        let statistics = HedgeStatistics::from_errors(&hedging_errors);
        let time_grid = (0..=n_steps).map(|step| step as f64 * plan.dt).collect();

        Ok(HedgeResult {
            initial_price: plan.premium,
            time_grid,
            display_paths,
            prices: prices.head(display_paths),
            deltas,
            cash,
            portfolio,
            hedging_errors,
            statistics,
        })
    }

    fn check_deadline(&self, started: Instant, completed: usize) -> Result<(), SimulationError> {
        match self.config.deadline() {
            Some(budget) if started.elapsed() > budget => Err(SimulationError::DeadlineExceeded {
                budget,
                completed,
                total: self.config.n_paths(),
            }),
            _ => Ok(()),
        }
    }
}

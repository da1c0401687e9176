//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) path generation
//! using the exact log-space step:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial spot price.
//!
//! # Parallelism
//!
//! Rows are filled in parallel with rayon. Each row owns a generator seeded
//! from a sub-seed drawn sequentially from the caller's [`PricerRng`], so the
//! output for a given seed does not depend on the thread count.

use pricer_core::types::{ContractSpec, PricingError};
use rayon::prelude::*;

use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// Under the risk-neutral measure:
/// ```text
/// dS = r S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams {
///     spot: 100.0,
///     rate: 0.05,
///     volatility: 0.2,
///     maturity: 1.0,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time horizon (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Validates the parameters.
    ///
    /// Zero volatility and a zero horizon are accepted (flat or
    /// deterministic paths).
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidArgument` if:
    /// - `spot` is not a finite positive number
    /// - `rate` is not finite
    /// - `volatility` or `maturity` is negative or not finite
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(PricingError::invalid(
                "spot",
                format!("must be a finite positive number, got {}", self.spot),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }
        check_non_negative("volatility", self.volatility)?;
        check_non_negative("maturity", self.maturity)?;
        Ok(())
    }
}

impl From<&ContractSpec> for GbmParams {
    fn from(spec: &ContractSpec) -> Self {
        Self::new(spec.spot, spec.rate, spec.volatility, spec.maturity)
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be finite and non-negative for path simulation, got {}", value),
        ))
    }
}

/// Dense set of simulated price paths.
///
/// Indexed by (path, step); step 0 is S₀ and step `n_steps` the terminal
/// price. Owned exclusively by the call that produced it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePathSet {
    n_paths: usize,
    n_steps: usize,
    data: Vec<f64>,
}

impl PricePathSet {
    /// Creates a zero-filled set.
    pub fn zeros(n_paths: usize, n_steps: usize) -> Self {
        Self {
            n_paths,
            n_steps,
            data: vec![0.0; n_paths * (n_steps + 1)],
        }
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps; each path has `n_steps + 1` points.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Points per path.
    #[inline]
    pub fn stride(&self) -> usize {
        self.n_steps + 1
    }

    /// Value at (path, step).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, path: usize, step: usize) -> f64 {
        assert!(step <= self.n_steps, "step {} out of range", step);
        self.data[path * self.stride() + step]
    }

    /// One path as a slice of `n_steps + 1` values.
    ///
    /// # Panics
    ///
    /// Panics if `path >= n_paths`.
    #[inline]
    pub fn path(&self, path: usize) -> &[f64] {
        let stride = self.stride();
        &self.data[path * stride..(path + 1) * stride]
    }

    /// Mutable view of one path.
    #[inline]
    pub fn path_mut(&mut self, path: usize) -> &mut [f64] {
        let stride = self.stride();
        &mut self.data[path * stride..(path + 1) * stride]
    }

    /// Iterator over paths.
    pub fn paths(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.data.chunks_exact(self.stride())
    }

    /// Terminal value of one path.
    #[inline]
    pub fn terminal(&self, path: usize) -> f64 {
        self.get(path, self.n_steps)
    }

    /// Flat row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy of the first `count` paths (all of them if fewer exist).
    pub fn head(&self, count: usize) -> Self {
        let n_paths = count.min(self.n_paths);
        Self {
            n_paths,
            n_steps: self.n_steps,
            data: self.data[..n_paths * self.stride()].to_vec(),
        }
    }

    /// Mutable rows for parallel filling.
    pub(crate) fn par_paths_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, f64> {
        let stride = self.stride();
        self.data.par_chunks_exact_mut(stride)
    }
}

/// Generates GBM paths.
///
/// # Arguments
///
/// * `params` - GBM parameters
/// * `n_steps` - Number of time steps (dt = T / n_steps)
/// * `n_paths` - Number of independent paths
/// * `rng` - Random source; advanced by exactly `n_paths` draws
///
/// # Errors
///
/// Returns `PricingError::InvalidArgument` if the parameters fail
/// [`GbmParams::validate`] or either count is zero.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{generate_gbm_paths, GbmParams};
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let paths = generate_gbm_paths(GbmParams::default(), 252, 1_000, &mut rng).unwrap();
///
/// assert_eq!(paths.n_paths(), 1_000);
/// assert_eq!(paths.path(0).len(), 253);
/// assert_eq!(paths.get(17, 0), 100.0);
/// ```
pub fn generate_gbm_paths(
    params: GbmParams,
    n_steps: usize,
    n_paths: usize,
    rng: &mut PricerRng,
) -> Result<PricePathSet, PricingError> {
    params.validate()?;
    if n_steps == 0 {
        return Err(PricingError::invalid("n_steps", "must be at least 1"));
    }
    if n_paths == 0 {
        return Err(PricingError::invalid("n_paths", "must be at least 1"));
    }

    let dt = params.maturity / n_steps as f64;
    let drift_dt = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    let seeds = rng.split_seeds(n_paths);
    let mut paths = PricePathSet::zeros(n_paths, n_steps);

    paths
        .par_paths_mut()
        .zip(seeds.par_iter())
        .for_each(|(row, &seed)| {
            let mut path_rng = PricerRng::from_seed(seed);
            row[0] = params.spot;
            // Draw the shocks in place, then compound them
            path_rng.fill_normal(&mut row[1..]);
            for step in 1..row.len() {
                let increment = drift_dt + vol_sqrt_dt * row[step];
                row[step] = row[step - 1] * increment.exp();
            }
        });

    Ok(paths)
}

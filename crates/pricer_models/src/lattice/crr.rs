//! Cox-Ross-Rubinstein binomial lattice.
//!
//! ## Parameterisation
//!
//! - dt = T / steps
//! - u = e^(σ√dt), d = 1/u
//! - p = (e^(r·dt) - d) / (u - d)
//!
//! Node j at step i carries the underlying value S·u^(i-j)·d^j. Option values
//! are filled from the terminal payoff backwards:
//!
//! V[j, i] = e^(-r·dt)·(p·V[j, i+1] + (1-p)·V[j+1, i+1])
//!
//! ## Cost
//!
//! Time and memory are both O(steps²). `steps` is caller controlled and is
//! not capped here; callers exposing the lattice to untrusted input must
//! bound it.

use pricer_core::types::{ContractSpec, PricingError};

/// Scalar output of a lattice valuation.
///
/// For degenerate contracts `price`, `up`, `down` and `probability` are all
/// zero and `tree` is `None`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeResult {
    /// Option value at the root node.
    pub price: f64,
    /// Up factor u.
    pub up: f64,
    /// Down factor d.
    pub down: f64,
    /// Risk-neutral probability of an up move.
    pub probability: f64,
    /// Node values, present only when requested through
    /// [`CrrLattice::price_with_tree`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub tree: Option<LatticeTree>,
}

impl LatticeResult {
    fn degenerate() -> Self {
        Self::default()
    }
}

/// Triangular snapshot of a lattice for visualisation.
///
/// `underlying[i]` and `option_values[i]` hold the i+1 nodes of time step i,
/// ordered from the highest underlying value (all up moves) to the lowest.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeTree {
    /// Number of time steps.
    pub steps: usize,
    /// Underlying value per (step, node).
    pub underlying: Vec<Vec<f64>>,
    /// Option value per (step, node).
    pub option_values: Vec<Vec<f64>>,
}

/// Lattice factors for one valuation.
#[derive(Clone, Copy, Debug)]
struct Factors {
    up: f64,
    down: f64,
    probability: f64,
    discount: f64,
}

impl Factors {
    /// `None` when σ√dt is too small for u and d to be distinguished.
    fn new(spec: &ContractSpec, steps: usize) -> Option<Self> {
        let dt = spec.maturity / steps as f64;
        let up = (spec.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        // Also catches positive σ whose exp(σ√dt) rounds to exactly 1
        if up <= down {
            return None;
        }
        Some(Self {
            up,
            down,
            probability: ((spec.rate * dt).exp() - down) / (up - down),
            discount: (-spec.rate * dt).exp(),
        })
    }
}

/// Reusable CRR lattice.
///
/// Owns two square arenas (underlying values and option values) of side
/// `steps + 1`, addressed by `node * stride + step`. The arenas grow to fit
/// the largest lattice requested and are reused by subsequent calls.
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractSpec, OptionKind};
/// use pricer_models::lattice::CrrLattice;
///
/// let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
/// let mut lattice = CrrLattice::new();
/// let result = lattice.price(&spec, 500).unwrap();
/// assert!((result.price - 10.4506).abs() < 1e-2);
/// assert!(result.tree.is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CrrLattice {
    underlying: Vec<f64>,
    values: Vec<f64>,
    stride: usize,
}

impl CrrLattice {
    /// Creates an empty lattice. Storage is allocated on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lattice with arenas pre-sized for `steps` time steps.
    pub fn with_capacity(steps: usize) -> Self {
        let side = steps + 1;
        Self {
            underlying: vec![0.0; side * side],
            values: vec![0.0; side * side],
            stride: side,
        }
    }

    /// Largest step count the current arenas hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.stride.saturating_sub(1)
    }

    /// Prices a European option on a lattice of `steps` time steps.
    ///
    /// # Errors
    /// - `PricingError::InvalidArgument` if `steps == 0` or the contract
    ///   fails validation
    pub fn price(&mut self, spec: &ContractSpec, steps: usize) -> Result<LatticeResult, PricingError> {
        check_steps(steps)?;
        spec.validate()?;
        Ok(self.evaluate(spec, steps, false))
    }

    /// Same as [`CrrLattice::price`] but also returns the node values.
    ///
    /// # Errors
    /// Same as [`CrrLattice::price`].
    pub fn price_with_tree(
        &mut self,
        spec: &ContractSpec,
        steps: usize,
    ) -> Result<LatticeResult, PricingError> {
        check_steps(steps)?;
        spec.validate()?;
        Ok(self.evaluate(spec, steps, true))
    }

    /// Finite-difference delta from two child lattices.
    ///
    /// The spot is bumped to S·u and S·d and each is repriced with
    /// `steps - 1` steps over the remaining time T - dt:
    ///
    /// Δ ≈ (V(S·u) - V(S·d)) / (S·u - S·d)
    ///
    /// Returns 0 for degenerate contracts, for a single-step lattice (whose
    /// children have no time left) and when u and d coincide.
    ///
    /// # Errors
    /// - `PricingError::InvalidArgument` if `steps == 0` or the contract
    ///   fails validation
    pub fn delta(&mut self, spec: &ContractSpec, steps: usize) -> Result<f64, PricingError> {
        check_steps(steps)?;
        spec.validate()?;
        if spec.is_degenerate() {
            return Ok(0.0);
        }
        let Some(factors) = Factors::new(spec, steps) else {
            return Ok(0.0);
        };

        let spot_up = spec.spot * factors.up;
        let spot_down = spec.spot * factors.down;
        let denominator = spot_up - spot_down;
        if denominator == 0.0 {
            return Ok(0.0);
        }

        let remaining = spec.maturity - spec.maturity / steps as f64;
        let child = spec.with_maturity(remaining);
        let child_steps = steps - 1;
        if child_steps == 0 {
            return Ok(0.0);
        }

        let price_up = self.evaluate(&child.with_spot(spot_up), child_steps, false).price;
        let price_down = self.evaluate(&child.with_spot(spot_down), child_steps, false).price;
        Ok((price_up - price_down) / denominator)
    }

    /// Single guarded entry for validated input.
    fn evaluate(&mut self, spec: &ContractSpec, steps: usize, capture: bool) -> LatticeResult {
        if spec.is_degenerate() {
            return LatticeResult::degenerate();
        }
        let Some(factors) = Factors::new(spec, steps) else {
            return LatticeResult::degenerate();
        };

        self.reserve(steps);
        self.induct(spec, steps, &factors);

        LatticeResult {
            price: self.values[0],
            up: factors.up,
            down: factors.down,
            probability: factors.probability,
            tree: capture.then(|| self.snapshot(steps)),
        }
    }

    fn reserve(&mut self, steps: usize) {
        let side = steps + 1;
        if side > self.stride {
            self.underlying.resize(side * side, 0.0);
            self.values.resize(side * side, 0.0);
            self.stride = side;
        }
    }

    #[inline]
    fn index(&self, node: usize, step: usize) -> usize {
        node * self.stride + step
    }

    fn induct(&mut self, spec: &ContractSpec, steps: usize, factors: &Factors) {
        for step in 0..=steps {
            for node in 0..=step {
                let ups = (step - node) as i32;
                let downs = node as i32;
                let idx = self.index(node, step);
                self.underlying[idx] = spec.spot * factors.up.powi(ups) * factors.down.powi(downs);
            }
        }

        for node in 0..=steps {
            let idx = self.index(node, steps);
            self.values[idx] = spec.kind.payoff(self.underlying[idx], spec.strike);
        }

        let p = factors.probability;
        for step in (0..steps).rev() {
            for node in 0..=step {
                let up_value = self.values[self.index(node, step + 1)];
                let down_value = self.values[self.index(node + 1, step + 1)];
                let idx = self.index(node, step);
                self.values[idx] = factors.discount * (p * up_value + (1.0 - p) * down_value);
            }
        }
    }

    fn snapshot(&self, steps: usize) -> LatticeTree {
        let layer = |arena: &[f64], step: usize| -> Vec<f64> {
            (0..=step).map(|node| arena[self.index(node, step)]).collect()
        };
        LatticeTree {
            steps,
            underlying: (0..=steps).map(|step| layer(&self.underlying, step)).collect(),
            option_values: (0..=steps).map(|step| layer(&self.values, step)).collect(),
        }
    }
}

/// Prices a contract on a fresh lattice.
///
/// Convenience wrapper around [`CrrLattice::price`] for one-off calls.
///
/// # Errors
/// Same as [`CrrLattice::price`].
pub fn crr_price(spec: &ContractSpec, steps: usize) -> Result<LatticeResult, PricingError> {
    CrrLattice::new().price(spec, steps)
}

/// Lattice delta on a fresh lattice. See [`CrrLattice::delta`].
///
/// # Errors
/// Same as [`CrrLattice::delta`].
pub fn crr_delta(spec: &ContractSpec, steps: usize) -> Result<f64, PricingError> {
    CrrLattice::new().delta(spec, steps)
}

fn check_steps(steps: usize) -> Result<(), PricingError> {
    if steps == 0 {
        Err(PricingError::invalid("steps", "must be at least 1"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black_scholes;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionKind;

    fn atm(kind: OptionKind) -> ContractSpec {
        ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, kind)
    }

    #[test]
    fn test_factors() {
        let result = crr_price(&atm(OptionKind::Call), 4).unwrap();
        let dt: f64 = 0.25;
        let up = (0.2 * dt.sqrt()).exp();
        assert_relative_eq!(result.up, up, epsilon = 1e-15);
        assert_relative_eq!(result.down, 1.0 / up, epsilon = 1e-15);
        let p = ((0.05 * dt).exp() - 1.0 / up) / (up - 1.0 / up);
        assert_relative_eq!(result.probability, p, epsilon = 1e-15);
        assert!(result.probability > 0.0 && result.probability < 1.0);
    }

    #[test]
    fn test_single_step_by_hand() {
        let spec = atm(OptionKind::Call);
        let result = crr_price(&spec, 1).unwrap();
        let u = 0.2_f64.exp();
        let d = 1.0 / u;
        let p = (0.05_f64.exp() - d) / (u - d);
        let expected = (-0.05_f64).exp() * p * (100.0 * u - 100.0);
        assert_relative_eq!(result.price, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_converges_to_black_scholes() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let spec = atm(kind);
            let analytic = black_scholes(&spec).unwrap().price;
            let lattice = crr_price(&spec, 500).unwrap().price;
            assert!(
                (lattice - analytic).abs() < 1e-2,
                "{}: lattice {} vs analytic {}",
                kind,
                lattice,
                analytic
            );
        }
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = crr_price(&atm(OptionKind::Call), 0).unwrap_err();
        assert_eq!(err.parameter(), "steps");
        assert_eq!(crr_delta(&atm(OptionKind::Call), 0).unwrap_err().parameter(), "steps");
    }

    #[test]
    fn test_invalid_contract_rejected() {
        let spec = atm(OptionKind::Put).with_spot(-1.0);
        assert_eq!(crr_price(&spec, 10).unwrap_err().parameter(), "spot");
    }

    #[test]
    fn test_degenerate_contract_is_zero() {
        let spec = atm(OptionKind::Call).with_maturity(0.0);
        let result = crr_price(&spec, 50).unwrap();
        assert_eq!(result, LatticeResult::default());

        let spec = atm(OptionKind::Put).with_volatility(0.0);
        let result = CrrLattice::new().price_with_tree(&spec, 50).unwrap();
        assert_eq!(result.price, 0.0);
        assert_eq!(result.up, 0.0);
        assert_eq!(result.down, 0.0);
        assert_eq!(result.probability, 0.0);
        assert!(result.tree.is_none());
        assert_eq!(crr_delta(&spec, 50).unwrap(), 0.0);
    }

    #[test]
    fn test_tree_shape_and_root() {
        let spec = atm(OptionKind::Put);
        let result = CrrLattice::new().price_with_tree(&spec, 3).unwrap();
        let tree = result.tree.as_ref().unwrap();
        assert_eq!(tree.steps, 3);
        assert_eq!(tree.underlying.len(), 4);
        for (step, layer) in tree.underlying.iter().enumerate() {
            assert_eq!(layer.len(), step + 1);
            assert_eq!(tree.option_values[step].len(), step + 1);
        }
        assert_eq!(tree.underlying[0][0], 100.0);
        assert_eq!(tree.option_values[0][0], result.price);
        // Terminal layer holds the payoff
        for (s, v) in tree.underlying[3].iter().zip(&tree.option_values[3]) {
            assert_eq!(*v, (100.0 - s).max(0.0));
        }
    }

    #[test]
    fn test_price_with_tree_matches_price() {
        let spec = atm(OptionKind::Call);
        let mut lattice = CrrLattice::new();
        let plain = lattice.price(&spec, 25).unwrap();
        let with_tree = lattice.price_with_tree(&spec, 25).unwrap();
        assert_eq!(plain.price, with_tree.price);
    }

    #[test]
    fn test_arena_reuse() {
        let spec = atm(OptionKind::Call);
        let mut lattice = CrrLattice::with_capacity(100);
        assert_eq!(lattice.capacity(), 100);

        let small = lattice.price(&spec, 10).unwrap();
        assert_eq!(lattice.capacity(), 100);
        let large = lattice.price(&spec, 200).unwrap();
        assert_eq!(lattice.capacity(), 200);
        // A stale larger arena must not leak into a smaller valuation
        let small_again = lattice.price(&spec, 10).unwrap();
        assert_eq!(small.price, small_again.price);
        assert_eq!(large.price, crr_price(&spec, 200).unwrap().price);
    }

    #[test]
    fn test_delta_close_to_analytic() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let spec = atm(kind);
            let analytic = black_scholes(&spec).unwrap().delta;
            let lattice = crr_delta(&spec, 400).unwrap();
            assert!((lattice - analytic).abs() < 1e-2, "{}: {} vs {}", kind, lattice, analytic);
        }
    }

    #[test]
    fn test_delta_single_step_is_zero() {
        assert_eq!(crr_delta(&atm(OptionKind::Call), 1).unwrap(), 0.0);
    }

    #[test]
    fn test_delta_tiny_volatility_is_finite() {
        let spec = atm(OptionKind::Call).with_volatility(1e-300);
        let delta = crr_delta(&spec, 10).unwrap();
        assert!(delta.is_finite());
        assert_eq!(delta, 0.0);
    }
}

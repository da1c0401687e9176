//! Scenario execution engine.
//!
//! Reprices a contract under each scenario with the closed-form model and
//! reports P&L against the unshocked price.

use pricer_core::types::{ContractSpec, PricingError};
use pricer_models::analytical::evaluate;

use super::presets::{PresetScenarioType, ShockScenario};

/// Result of one scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioResult {
    /// Scenario name
    pub name: String,
    /// Relative spot shock applied
    pub spot_shock: f64,
    /// Relative volatility shock applied
    pub vol_shock: f64,
    /// Shocked spot
    pub spot: f64,
    /// Shocked (floored) volatility
    pub volatility: f64,
    /// Option price under the scenario
    pub price: f64,
    /// P&L (scenario price - base price)
    pub pnl: f64,
}

impl ScenarioResult {
    /// Check if P&L is a loss (negative).
    pub fn is_loss(&self) -> bool {
        self.pnl < 0.0
    }

    /// Check if P&L is a gain (positive).
    pub fn is_gain(&self) -> bool {
        self.pnl > 0.0
    }
}

/// Runs an ordered list of shock scenarios against a contract.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{ContractSpec, OptionKind};
/// use pricer_risk::scenarios::{ScenarioEngine, ShockScenario};
///
/// let mut engine = ScenarioEngine::new();
/// engine.add_scenario(ShockScenario::new("Vol spike", 0.0, 1.0).unwrap());
///
/// let spec = ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put);
/// let results = engine.execute(&spec).unwrap();
/// assert!(results[0].is_gain());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScenarioEngine {
    scenarios: Vec<ShockScenario>,
}

impl ScenarioEngine {
    /// Create an engine with no scenarios.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine loaded with the five preset scenarios.
    pub fn standard() -> Self {
        Self {
            scenarios: PresetScenarioType::all()
                .into_iter()
                .map(ShockScenario::from)
                .collect(),
        }
    }

    /// Append a scenario.
    pub fn add_scenario(&mut self, scenario: ShockScenario) {
        self.scenarios.push(scenario);
    }

    /// Scenarios in execution order.
    pub fn scenarios(&self) -> &[ShockScenario] {
        &self.scenarios
    }

    /// Number of scenarios.
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// Reprices `spec` under every scenario, in order.
    ///
    /// The base price is computed once from the unshocked contract.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidArgument` if the contract fails
    /// validation.
    pub fn execute(&self, spec: &ContractSpec) -> Result<Vec<ScenarioResult>, PricingError> {
        spec.validate()?;
        let base_price = evaluate(spec).price;

        Ok(self
            .scenarios
            .iter()
            .map(|scenario| {
                let shocked = scenario.apply(spec);
                let price = evaluate(&shocked).price;
                ScenarioResult {
                    name: scenario.name().to_string(),
                    spot_shock: scenario.spot_shock(),
                    vol_shock: scenario.vol_shock(),
                    spot: shocked.spot,
                    volatility: shocked.volatility,
                    price,
                    pnl: price - base_price,
                }
            })
            .collect())
    }

    /// Result with the lowest P&L.
    pub fn worst_case(results: &[ScenarioResult]) -> Option<&ScenarioResult> {
        results.iter().min_by(|a, b| a.pnl.total_cmp(&b.pnl))
    }
}

/// Runs the standard five-scenario grid.
///
/// # Errors
///
/// Returns `PricingError::InvalidArgument` if the contract fails validation.
pub fn stress_test(spec: &ContractSpec) -> Result<Vec<ScenarioResult>, PricingError> {
    ScenarioEngine::standard().execute(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::OptionKind;
    use pricer_models::analytical::black_scholes;

    fn atm(kind: OptionKind) -> ContractSpec {
        ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, kind)
    }

    #[test]
    fn test_scenario_engine_new() {
        assert_eq!(ScenarioEngine::new().scenario_count(), 0);
        assert_eq!(ScenarioEngine::standard().scenario_count(), 5);
    }

    #[test]
    fn test_base_case_pnl_is_exactly_zero() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let results = stress_test(&atm(kind)).unwrap();
            let base = &results[2];
            assert_eq!(base.name, "Base Case");
            assert_eq!(base.pnl, 0.0);
            assert_eq!(base.price, black_scholes(&atm(kind)).unwrap().price);
        }
    }

    #[test]
    fn test_call_pnl_ordering() {
        let results = stress_test(&atm(OptionKind::Call)).unwrap();
        assert!(results[0].is_loss());
        assert!(results[1].is_loss());
        assert!(results[3].is_gain());
        assert!(results[4].is_gain());
        let worst = ScenarioEngine::worst_case(&results).unwrap();
        assert_eq!(worst.name, "Crash -20%");
    }

    #[test]
    fn test_put_gains_in_crash() {
        let results = stress_test(&atm(OptionKind::Put)).unwrap();
        assert!(results[0].is_gain());
        assert!(results[4].is_loss());
    }

    #[test]
    fn test_result_records_shocked_inputs() {
        let results = stress_test(&atm(OptionKind::Call)).unwrap();
        let crash = &results[0];
        assert_eq!(crash.spot_shock, -0.2);
        assert_eq!(crash.vol_shock, 0.5);
        assert!((crash.spot - 80.0).abs() < 1e-12);
        assert!((crash.volatility - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_contract_rejected() {
        let err = stress_test(&atm(OptionKind::Call).with_spot(0.0)).unwrap_err();
        assert_eq!(err.parameter(), "spot");
    }

    #[test]
    fn test_empty_engine_returns_no_results() {
        let results = ScenarioEngine::new().execute(&atm(OptionKind::Call)).unwrap();
        assert!(results.is_empty());
        assert!(ScenarioEngine::worst_case(&results).is_none());
    }
}

//! Preset scenarios for common stress tests.
//!
//! Provides the standard spot/volatility shock grid:
//!
//! | Scenario | Spot | Volatility |
//! |----------|------|------------|
//! | Crash -20% | -20% | +50% |
//! | Bear -10% | -10% | +25% |
//! | Base Case | 0% | 0% |
//! | Bull +10% | +10% | -10% |
//! | Rally +20% | +20% | -20% |
//!
//! Volatility shocks are relative: σ' = σ·(1 + shock), floored at
//! [`VOL_FLOOR`].

use pricer_core::types::{ContractSpec, PricingError};

/// Lowest volatility a shocked scenario may produce.
pub const VOL_FLOOR: f64 = 0.05;

/// Types of preset scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetScenarioType {
    /// Spot -20%, volatility +50%
    Crash,
    /// Spot -10%, volatility +25%
    Bear,
    /// No shock
    Base,
    /// Spot +10%, volatility -10%
    Bull,
    /// Spot +20%, volatility -20%
    Rally,
}

impl PresetScenarioType {
    /// The standard grid, from most bearish to most bullish.
    pub fn all() -> [Self; 5] {
        [Self::Crash, Self::Bear, Self::Base, Self::Bull, Self::Rally]
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crash => "Crash -20%",
            Self::Bear => "Bear -10%",
            Self::Base => "Base Case",
            Self::Bull => "Bull +10%",
            Self::Rally => "Rally +20%",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Crash => "Spot falls 20%, volatility rises 50%",
            Self::Bear => "Spot falls 10%, volatility rises 25%",
            Self::Base => "Unshocked market",
            Self::Bull => "Spot rises 10%, volatility falls 10%",
            Self::Rally => "Spot rises 20%, volatility falls 20%",
        }
    }

    /// Relative spot shock as a fraction.
    pub fn spot_shock(&self) -> f64 {
        match self {
            Self::Crash => -0.20,
            Self::Bear => -0.10,
            Self::Base => 0.0,
            Self::Bull => 0.10,
            Self::Rally => 0.20,
        }
    }

    /// Relative volatility shock as a fraction.
    pub fn vol_shock(&self) -> f64 {
        match self {
            Self::Crash => 0.50,
            Self::Bear => 0.25,
            Self::Base => 0.0,
            Self::Bull => -0.10,
            Self::Rally => -0.20,
        }
    }
}

/// A named pair of relative spot and volatility shocks.
///
/// # Examples
///
/// ```
/// use pricer_core::types::ContractSpec;
/// use pricer_risk::scenarios::{PresetScenarioType, ShockScenario};
///
/// let crash = ShockScenario::from(PresetScenarioType::Crash);
/// let shocked = crash.apply(&ContractSpec::default());
/// assert!((shocked.spot - 80.0).abs() < 1e-12);
/// assert!((shocked.volatility - 0.30).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ShockScenario {
    name: String,
    spot_shock: f64,
    vol_shock: f64,
}

impl ShockScenario {
    /// Creates a custom scenario.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidArgument` if either shock is not finite
    /// or `spot_shock <= -1` (which would make the shocked spot non-positive).
    pub fn new(
        name: impl Into<String>,
        spot_shock: f64,
        vol_shock: f64,
    ) -> Result<Self, PricingError> {
        if !spot_shock.is_finite() || spot_shock <= -1.0 {
            return Err(PricingError::invalid(
                "spot_shock",
                format!("must be finite and greater than -1, got {}", spot_shock),
            ));
        }
        if !vol_shock.is_finite() {
            return Err(PricingError::invalid(
                "vol_shock",
                format!("must be finite, got {}", vol_shock),
            ));
        }
        Ok(Self {
            name: name.into(),
            spot_shock,
            vol_shock,
        })
    }

    /// Scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative spot shock as a fraction.
    pub fn spot_shock(&self) -> f64 {
        self.spot_shock
    }

    /// Relative volatility shock as a fraction.
    pub fn vol_shock(&self) -> f64 {
        self.vol_shock
    }

    /// Returns the contract with shocked spot and volatility.
    ///
    /// - S' = S·(1 + spot_shock)
    /// - σ' = max([`VOL_FLOOR`], σ·(1 + vol_shock)), except that a zero
    ///   volatility shock leaves σ untouched
    ///
    /// Leaving σ untouched under a zero shock keeps an unshocked scenario
    /// bit-identical to the base contract even when σ is below the floor.
    pub fn apply(&self, spec: &ContractSpec) -> ContractSpec {
        // Unlike a blanket max(0.05, ·), the Base Case is not floored, so its
        // P&L stays exactly 0 for σ < VOL_FLOOR. Do not floor this branch.
        let volatility = if self.vol_shock == 0.0 {
            spec.volatility
        } else {
            (spec.volatility * (1.0 + self.vol_shock)).max(VOL_FLOOR)
        };
        spec.with_spot(spec.spot * (1.0 + self.spot_shock))
            .with_volatility(volatility)
    }
}

impl From<PresetScenarioType> for ShockScenario {
    fn from(preset: PresetScenarioType) -> Self {
        Self {
            name: preset.name().to_string(),
            spot_shock: preset.spot_shock(),
            vol_shock: preset.vol_shock(),
        }
    }
}

//! Scenario analysis for single options.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Engine                  │
//! ├──────────────────────────────────────────────┤
//! │  PresetScenarioType - Standard shock grid    │
//! │  ShockScenario      - Named spot/vol shock   │
//! │  ScenarioEngine     - Repricing & P&L        │
//! └──────────────────────────────────────────────┘
//! ```

mod engine;
mod presets;

pub use engine::{stress_test, ScenarioEngine, ScenarioResult};
pub use presets::{PresetScenarioType, ShockScenario, VOL_FLOOR};

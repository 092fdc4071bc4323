//! Multi-year equity projection.
//!
//! A closed-form model: value compounds at the appreciation rate while debt
//! decays by a fixed annual factor. This is an intentional approximation of
//! a loan amortization schedule, not a bug; the product trades schedule
//! fidelity for an explainable year-by-year table.

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_AMORTIZATION_FACTOR, DEFAULT_APPRECIATION_RATE, DEFAULT_HORIZON_YEARS,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInputs {
    pub starting_value: f64,
    pub starting_debt: f64,
    /// Fractional annual appreciation (0.04 means 4%/yr).
    pub appreciation_rate: f64,
    /// Annual debt decay multiplier (0.92 keeps 92% of the balance each year).
    pub amortization_factor: f64,
    pub horizon_years: u32,
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        Self {
            starting_value: 0.0,
            starting_debt: 0.0,
            appreciation_rate: DEFAULT_APPRECIATION_RATE,
            amortization_factor: DEFAULT_AMORTIZATION_FACTOR,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: u32,
    pub total_value: f64,
    pub total_debt: f64,
    pub total_equity: f64,
}

/// Year-indexed value/debt/equity table, years 0 through the horizon
/// inclusive. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub rows: Vec<ProjectionRow>,
}

impl Projection {
    pub fn final_equity(&self) -> f64 {
        self.rows.last().map(|row| row.total_equity).unwrap_or(0.0)
    }
}

pub fn simulate_projection(inputs: &ProjectionInputs) -> Projection {
    let rows = (0..=inputs.horizon_years)
        .map(|year| {
            let total_value =
                inputs.starting_value * (1.0 + inputs.appreciation_rate).powi(year as i32);
            let total_debt =
                (inputs.starting_debt * inputs.amortization_factor.powi(year as i32)).max(0.0);
            ProjectionRow {
                year,
                total_value,
                total_debt,
                total_equity: total_value - total_debt,
            }
        })
        .collect();

    Projection { rows }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario {
    HoldAll,
    AiOptimal,
    SellUnderperformers,
}

impl Scenario {
    pub const fn ordered() -> [Self; 3] {
        [Self::HoldAll, Self::AiOptimal, Self::SellUnderperformers]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HoldAll => "Hold All",
            Self::AiOptimal => "AI Optimal",
            Self::SellUnderperformers => "Sell Underperformers",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::HoldAll => "Keep every property and let equity compound",
            Self::AiOptimal => "Follow the engine's allocation guidance each year",
            Self::SellUnderperformers => "Exit the weakest holdings and redeploy proceeds",
        }
    }

    /// Numeric assumptions per scenario. All three currently share the
    /// default rates; the per-scenario split exists so future tuning is a
    /// constant change, not a behavior rewrite.
    pub const fn assumptions(self) -> ScenarioAssumptions {
        ScenarioAssumptions {
            appreciation_rate: DEFAULT_APPRECIATION_RATE,
            amortization_factor: DEFAULT_AMORTIZATION_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAssumptions {
    pub appreciation_rate: f64,
    pub amortization_factor: f64,
}

/// Project a named strategy from current aggregate value and debt.
pub fn simulate_scenario(
    scenario: Scenario,
    starting_value: f64,
    starting_debt: f64,
    horizon_years: u32,
) -> Projection {
    let assumptions = scenario.assumptions();
    simulate_projection(&ProjectionInputs {
        starting_value,
        starting_debt,
        appreciation_rate: assumptions.appreciation_rate,
        amortization_factor: assumptions.amortization_factor,
        horizon_years,
    })
}

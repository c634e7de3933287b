use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// The rate card: fixed unit rates behind the pre-order estimator.
//
// Defaults are the shop's standing rates; a YAML file can override any
// subset of them (see `load_rate_card`).
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    /// Base ingredient cost per square inch of one layer.
    pub cost_per_square_inch: Decimal,
    /// Filling cost per square inch, per layer boundary (layers - 1).
    pub filling_cost_per_square_inch: Decimal,
    pub frosting_cost_per_square_inch: Decimal,
    pub base_labor_cost: Decimal,
    pub labor_cost_per_square_inch: Decimal,
    pub labor_cost_per_layer: Decimal,
    /// Applied to the ingredients + labor sum.
    pub overhead_percentage: Decimal,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            cost_per_square_inch: dec!(0.50),
            filling_cost_per_square_inch: dec!(0.15),
            frosting_cost_per_square_inch: dec!(0.20),
            base_labor_cost: dec!(20.00),
            labor_cost_per_square_inch: dec!(0.10),
            labor_cost_per_layer: dec!(5.00),
            overhead_percentage: dec!(0.30),
        }
    }
}

/// Load a rate card from a YAML file. Missing fields keep their defaults.
pub fn load_rate_card(path: impl AsRef<Path>) -> Result<RateCard> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading rate card {}", path.display()))?;
    let card: RateCard =
        serde_yaml::from_str(&text).with_context(|| format!("parsing rate card {}", path.display()))?;
    Ok(card)
}

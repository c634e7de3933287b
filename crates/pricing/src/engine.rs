use crate::api::{MarginPrice, PricingResult};
use crate::quantity::{self, IngredientCosts};
use cakecalc_model::Cake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Actual-cost calculator: stored labor + other costs, plus real ingredient
// costs from the template's base map and the cake's extra map, projected to
// suggested sale prices at the requested margins.
//
// A malformed quantity map contributes zero and is logged with the owning
// entity id; the computation itself has no failure modes.
// ---------------------------------------------------------------------------

/// Parse a comma-separated margins parameter. Absent or empty input falls
/// back to the defaults; a token that does not parse becomes margin 0.
/// Order and duplicates are preserved.
pub fn parse_margins(raw: Option<&str>) -> Vec<Decimal> {
    match raw {
        Some(s) if !s.is_empty() => s
            .split(',')
            .map(|token| token.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO))
            .collect(),
        _ => vec![dec!(0.1), dec!(0.2), dec!(0.3)],
    }
}

/// Total cost of a persisted cake (template joined beforehand) and one
/// suggested price per margin: `price = total * (1 + margin)`.
pub fn price_cake(cake: &Cake, costs: &dyn IngredientCosts, margins: &[Decimal]) -> PricingResult {
    let mut total = cake.labor + cake.other_costs;

    if let Some(template) = &cake.template {
        match quantity::parse_quantity_map(Some(template.base_ingredients.as_str())) {
            Ok(map) => total += quantity::map_cost(&map, costs),
            Err(err) => tracing::warn!(
                template_id = template.id,
                %err,
                "skipping base ingredients: malformed quantity map"
            ),
        }
    }

    match quantity::parse_quantity_map(cake.extra_ingredients.as_deref()) {
        Ok(map) => total += quantity::map_cost(&map, costs),
        Err(err) => tracing::warn!(
            cake_id = cake.id,
            %err,
            "skipping extra ingredients: malformed quantity map"
        ),
    }

    let prices = margins
        .iter()
        .map(|&margin| MarginPrice {
            margin,
            price: total * (Decimal::ONE + margin),
        })
        .collect();

    PricingResult {
        cake_id: cake.id,
        cake_name: cake.name.clone(),
        total_cost: total,
        prices,
    }
}

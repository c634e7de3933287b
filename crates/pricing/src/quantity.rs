use indexmap::IndexMap;
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Quantity maps: serialized ingredient-id -> quantity mappings, stored on
// templates (base ingredients) and cakes (extra ingredients).
//
// Parsing is a separate, fallible step so callers can log the owning entity
// id and continue with a zero contribution from that map.
// ---------------------------------------------------------------------------

/// Unit-cost lookup injected by the calling service.
pub trait IngredientCosts {
    /// Cost per unit for an ingredient id, or None if no such row exists.
    fn cost_per_unit(&self, ingredient_id: i64) -> Option<Decimal>;
}

/// Parse a serialized quantity map. None or blank input is an empty map;
/// a malformed payload is an error the caller downgrades to "contributes 0".
pub fn parse_quantity_map(
    raw: Option<&str>,
) -> Result<IndexMap<i64, Decimal>, serde_json::Error> {
    match raw {
        Some(s) if !s.trim().is_empty() => serde_json::from_str(s),
        _ => Ok(IndexMap::new()),
    }
}

/// Sum of `cost_per_unit * quantity` over the map, one lookup per entry.
/// Ids with no matching ingredient are skipped: a dangling reference must
/// not break pricing of an otherwise valid cake.
pub fn map_cost(map: &IndexMap<i64, Decimal>, costs: &dyn IngredientCosts) -> Decimal {
    let mut total = Decimal::ZERO;
    for (&ingredient_id, &quantity) in map {
        if let Some(unit_cost) = costs.cost_per_unit(ingredient_id) {
            total += unit_cost * quantity;
        }
    }
    total
}

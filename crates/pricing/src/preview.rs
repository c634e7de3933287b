use crate::api::{CostBreakdown, CustomSize, PreviewRequest, PreviewResponse};
use crate::config::RateCard;
use crate::geometry::{self, Dims};
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Pre-order estimator: rate-card economics over geometry and layer count.
// No ingredient catalog is consulted here; that is the actual-cost
// calculator's job once a cake exists.
//
// Rounding happens only at the four output fields; overhead and the total
// are computed from the unrounded running values first. Rounding earlier
// shifts cent-level totals, so the order matters.
// ---------------------------------------------------------------------------

/// Preset-size lookup injected by the calling service. Returns the stored
/// dimensions payload for a size id, or None when the size is unknown or
/// has no dimensions.
pub trait SizeLookup {
    fn dimensions_for(&self, size_id: i64) -> Option<String>;
}

/// Estimate the cost of an order configuration. Total for every input:
/// an unusable size selection simply prices as a zero-area cake.
pub fn estimate(
    rates: &RateCard,
    req: &PreviewRequest,
    sizes: &dyn SizeLookup,
) -> PreviewResponse {
    let area = request_area(req, sizes);
    let layers = Decimal::from(req.layers);

    let mut ingredients = area * rates.cost_per_square_inch * layers;
    if req.layers > 1 && selected(&req.filling_id) {
        ingredients +=
            area * rates.filling_cost_per_square_inch * Decimal::from(req.layers - 1);
    }
    if selected(&req.frosting_id) {
        ingredients += area * rates.frosting_cost_per_square_inch;
    }

    let labor = rates.base_labor_cost
        + area * rates.labor_cost_per_square_inch
        + layers * rates.labor_cost_per_layer;

    let overhead = (ingredients + labor) * rates.overhead_percentage;

    PreviewResponse {
        cost_breakdown: CostBreakdown {
            ingredients: ingredients.round_dp(2),
            labor: labor.round_dp(2),
            overhead: overhead.round_dp(2),
        },
        total_cost: (ingredients + labor + overhead).round_dp(2),
        currency: "USD".into(),
    }
}

fn selected(id: &Option<String>) -> bool {
    id.as_deref().is_some_and(|s| !s.is_empty())
}

/// A non-empty `size_id` that parses as an integer selects the preset path;
/// a missing size or unusable payload there stays at area 0 rather than
/// falling back to the custom dimensions.
fn request_area(req: &PreviewRequest, sizes: &dyn SizeLookup) -> Decimal {
    let preset_id = req
        .size_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.trim().parse::<i64>().ok());

    if let Some(size_id) = preset_id {
        match sizes.dimensions_for(size_id).filter(|raw| !raw.is_empty()) {
            Some(raw) => match geometry::parse_dimensions(&raw) {
                Some(dims) => geometry::area_square_inches(&dims),
                None => {
                    tracing::warn!(size_id, "unusable dimensions payload on cake size");
                    Decimal::ZERO
                }
            },
            None => Decimal::ZERO,
        }
    } else if let Some(custom) = &req.custom_size {
        match custom_dims(custom) {
            Some(dims) => geometry::area_square_inches(&dims),
            None => Decimal::ZERO,
        }
    } else {
        Decimal::ZERO
    }
}

fn custom_dims(custom: &CustomSize) -> Option<Dims> {
    if let Some(diameter_in) = custom.diameter_in {
        return Some(Dims::Round { diameter_in });
    }
    match (custom.length_in, custom.width_in) {
        (Some(length_in), Some(width_in)) => Some(Dims::Sheet { length_in, width_in }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    struct Sizes(HashMap<i64, String>);

    impl SizeLookup for Sizes {
        fn dimensions_for(&self, size_id: i64) -> Option<String> {
            self.0.get(&size_id).cloned()
        }
    }

    fn no_sizes() -> Sizes {
        Sizes(HashMap::new())
    }

    fn req() -> PreviewRequest {
        PreviewRequest::default()
    }

    fn custom_sheet(length: i64, width: i64) -> Option<CustomSize> {
        Some(CustomSize {
            diameter_in: None,
            length_in: Some(Decimal::from(length)),
            width_in: Some(Decimal::from(width)),
        })
    }

    #[test]
    fn no_size_still_prices_base_labor() {
        let mut request = req();
        request.frosting_id = Some("2".into());
        let resp = estimate(&RateCard::default(), &request, &no_sizes());
        assert_eq!(resp.cost_breakdown.ingredients, dec!(0.00));
        assert_eq!(resp.cost_breakdown.labor, dec!(25.00));
        assert_eq!(resp.cost_breakdown.overhead, dec!(7.50));
        assert_eq!(resp.total_cost, dec!(32.50));
        assert_eq!(resp.currency, "USD");
    }

    #[test]
    fn square_two_layers_with_filling_and_frosting() {
        let mut request = req();
        request.custom_size = custom_sheet(8, 8);
        request.layers = 2;
        request.filling_id = Some("1".into());
        request.frosting_id = Some("3".into());
        let resp = estimate(&RateCard::default(), &request, &no_sizes());
        // area 64: 64 + 9.6 + 12.8 / 20 + 6.4 + 10 / 30% of 122.80
        assert_eq!(resp.cost_breakdown.ingredients, dec!(86.40));
        assert_eq!(resp.cost_breakdown.labor, dec!(36.40));
        assert_eq!(resp.cost_breakdown.overhead, dec!(36.84));
        assert_eq!(resp.total_cost, dec!(159.64));
    }

    #[test]
    fn filling_needs_more_than_one_layer() {
        let mut request = req();
        request.custom_size = custom_sheet(8, 8);
        request.filling_id = Some("1".into());
        let with_filling = estimate(&RateCard::default(), &request, &no_sizes());

        request.filling_id = None;
        let without = estimate(&RateCard::default(), &request, &no_sizes());

        assert_eq!(with_filling.total_cost, without.total_cost);
    }

    #[test]
    fn preset_size_resolves_through_the_lookup() {
        let sizes = Sizes(HashMap::from([(4, r#"{"lengthIn": 13, "widthIn": 9}"#.into())]));
        let mut request = req();
        request.size_id = Some("4".into());
        let resp = estimate(&RateCard::default(), &request, &sizes);
        // area 117: ingredients 58.50, labor 20 + 11.70 + 5 = 36.70
        assert_eq!(resp.cost_breakdown.ingredients, dec!(58.50));
        assert_eq!(resp.cost_breakdown.labor, dec!(36.70));
    }

    #[test]
    fn missing_preset_size_does_not_fall_back_to_custom() {
        let mut request = req();
        request.size_id = Some("77".into());
        request.custom_size = custom_sheet(8, 8);
        let resp = estimate(&RateCard::default(), &request, &no_sizes());
        assert_eq!(resp.cost_breakdown.ingredients, dec!(0.00));
    }

    #[test]
    fn non_numeric_size_id_falls_through_to_custom() {
        let mut request = req();
        request.size_id = Some("custom".into());
        request.custom_size = custom_sheet(2, 3);
        let resp = estimate(&RateCard::default(), &request, &no_sizes());
        // area 6 * 0.50
        assert_eq!(resp.cost_breakdown.ingredients, dec!(3.00));
    }

    #[test]
    fn unusable_preset_payload_prices_as_zero_area() {
        let sizes = Sizes(HashMap::from([(4, "not json".into())]));
        let mut request = req();
        request.size_id = Some("4".into());
        let resp = estimate(&RateCard::default(), &request, &sizes);
        assert_eq!(resp.cost_breakdown.ingredients, dec!(0.00));
        assert_eq!(resp.cost_breakdown.labor, dec!(25.00));
    }

    #[test]
    fn round_custom_size_uses_diameter() {
        let mut request = req();
        request.custom_size = Some(CustomSize {
            diameter_in: Some(Decimal::from(10)),
            length_in: None,
            width_in: None,
        });
        let resp = estimate(&RateCard::default(), &request, &no_sizes());
        // area pi * 25 = 78.5398...; ingredients 39.27 after rounding
        assert_eq!(resp.cost_breakdown.ingredients, dec!(39.27));
    }

    #[test]
    fn overhead_and_total_round_from_unrounded_components() {
        // area 0.01: ingredients 0.005, labor 25.001, overhead 7.5018.
        // Rounding the components first would give 32.50; the correct
        // total is 32.5078 -> 32.51.
        let mut request = req();
        request.custom_size = Some(CustomSize {
            diameter_in: None,
            length_in: Some(dec!(0.1)),
            width_in: Some(dec!(0.1)),
        });
        let resp = estimate(&RateCard::default(), &request, &no_sizes());
        assert_eq!(resp.cost_breakdown.ingredients, dec!(0.00));
        assert_eq!(resp.cost_breakdown.labor, dec!(25.00));
        assert_eq!(resp.cost_breakdown.overhead, dec!(7.50));
        assert_eq!(resp.total_cost, dec!(32.51));
    }
}

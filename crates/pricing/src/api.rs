use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire types for the two pricing endpoints. Field names are the
// compatibility surface consumed by the order form, so everything here is
// camelCase and decimals travel as JSON numbers.
// ---------------------------------------------------------------------------

/// Itemized cost of a persisted cake plus suggested sale prices.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub cake_id: i64,
    pub cake_name: String,
    pub total_cost: Decimal,
    pub prices: Vec<MarginPrice>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginPrice {
    pub margin: Decimal,
    pub price: Decimal,
}

/// Order configuration for a pre-order estimate. Selection ids travel as
/// strings (form values); `size_id` is parsed as an integer, tolerantly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default)]
    pub shape_id: Option<String>,
    /// Preset size id. Mutually exclusive with `custom_size` by convention.
    #[serde(default)]
    pub size_id: Option<String>,
    #[serde(default)]
    pub custom_size: Option<CustomSize>,
    #[serde(default = "default_layers")]
    pub layers: u32,
    /// Only priced in when `layers > 1`.
    #[serde(default)]
    pub filling_id: Option<String>,
    #[serde(default)]
    pub frosting_id: Option<String>,
}

fn default_layers() -> u32 {
    1
}

impl Default for PreviewRequest {
    fn default() -> Self {
        Self {
            type_id: None,
            shape_id: None,
            size_id: None,
            custom_size: None,
            layers: 1,
            filling_id: None,
            frosting_id: None,
        }
    }
}

/// Custom dimensions in inches: a diameter for round cakes, or
/// length + width for sheet cakes.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSize {
    pub diameter_in: Option<Decimal>,
    pub length_in: Option<Decimal>,
    pub width_in: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub ingredients: Decimal,
    pub labor: Decimal,
    pub overhead: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub cost_breakdown: CostBreakdown,
    pub total_cost: Decimal,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_request_defaults_to_one_layer() {
        let req: PreviewRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.layers, 1);
        assert!(req.size_id.is_none());
        assert!(req.custom_size.is_none());
    }

    #[test]
    fn preview_request_accepts_partial_custom_size() {
        let req: PreviewRequest =
            serde_json::from_str(r#"{"customSize":{"diameterIn":10},"layers":2}"#).unwrap();
        let custom = req.custom_size.unwrap();
        assert_eq!(custom.diameter_in, Some(rust_decimal::Decimal::from(10)));
        assert!(custom.length_in.is_none());
        assert_eq!(req.layers, 2);
    }
}

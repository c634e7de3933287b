use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity types for the cake catalog.
//
// Wire shape is camelCase JSON with decimals as numbers; these structs are
// used both as stored rows and as request/response bodies, so ids and
// housekeeping fields default when a client omits them on create.
//
// Quantity maps (Template.base_ingredients, Cake.extra_ingredients) and
// CakeSize.dimensions are stored as raw JSON strings and only interpreted
// by the pricing core, which is tolerant of malformed payloads.
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub cost_per_unit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    /// Size label shown in the UI, e.g. "10 inch".
    pub size: String,
    /// Cake type label, e.g. "Chocolate".
    #[serde(rename = "type")]
    pub kind: String,
    /// JSON map of ingredient id -> quantity.
    pub base_ingredients: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub template_id: i64,
    /// Joined on read; never stored.
    #[serde(default)]
    pub template: Option<Template>,
    /// Optional JSON map of ingredient id -> quantity, on top of the template.
    #[serde(default)]
    pub extra_ingredients: Option<String>,
    #[serde(default)]
    pub labor: Decimal,
    #[serde(default)]
    pub other_costs: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeType {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeShape {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeSize {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub shape_id: i64,
    pub name: String,
    /// JSON payload: {"roundDiameterIn": n} or {"lengthIn": n, "widthIn": n}.
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filling {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frosting {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Labor role with an hourly rate, e.g. "Baker" or "Decorator".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub hourly_rate: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn ingredient_wire_shape_is_camel_case() {
        let i = Ingredient {
            id: 3,
            name: "Flour".into(),
            cost_per_unit: Decimal::from_str("1.25").unwrap(),
        };
        let v = serde_json::to_value(&i).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["name"], "Flour");
        assert!(v["costPerUnit"].is_number());
    }

    #[test]
    fn template_type_field_round_trips() {
        let t: Template = serde_json::from_str(
            r#"{"name":"Classic","size":"10 inch","type":"Chocolate","baseIngredients":"{\"1\":2}"}"#,
        )
        .unwrap();
        assert_eq!(t.id, 0);
        assert_eq!(t.kind, "Chocolate");
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["type"], "Chocolate");
    }

    #[test]
    fn catalog_rows_default_to_active() {
        let s: CakeSize = serde_json::from_str(r#"{"name":"8 inch round"}"#).unwrap();
        assert!(s.is_active);
        assert_eq!(s.sort_order, 0);
        assert!(s.dimensions.is_none());
    }
}

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Dimension descriptors and area derivation.
//
// A missing or unusable payload is not an error: it resolves to no
// descriptor, and the estimator proceeds with area 0.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dims {
    Round { diameter_in: Decimal },
    Sheet { length_in: Decimal, width_in: Decimal },
}

/// Stored payload shape: `{"roundDiameterIn": n}` or
/// `{"lengthIn": n, "widthIn": n}`. Unknown keys are ignored and a round
/// diameter wins when both shapes appear.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDims {
    #[serde(default)]
    round_diameter_in: Option<Decimal>,
    #[serde(default)]
    length_in: Option<Decimal>,
    #[serde(default)]
    width_in: Option<Decimal>,
}

/// Tolerant parse of a stored dimensions payload.
pub fn parse_dimensions(raw: &str) -> Option<Dims> {
    let parsed: RawDims = serde_json::from_str(raw).ok()?;
    if let Some(diameter_in) = parsed.round_diameter_in {
        return Some(Dims::Round { diameter_in });
    }
    match (parsed.length_in, parsed.width_in) {
        (Some(length_in), Some(width_in)) => Some(Dims::Sheet { length_in, width_in }),
        _ => None,
    }
}

/// Area in square inches. Sheet areas are exact decimal products; the round
/// branch is the single float excursion (pi), converted back immediately.
pub fn area_square_inches(dims: &Dims) -> Decimal {
    match *dims {
        Dims::Round { diameter_in } => {
            let radius = (diameter_in / Decimal::TWO).to_f64().unwrap_or(0.0);
            Decimal::from_f64_retain(std::f64::consts::PI * radius * radius)
                .unwrap_or(Decimal::ZERO)
        }
        Dims::Sheet { length_in, width_in } => length_in * width_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn round_area(diameter: i64) -> f64 {
        area_square_inches(&Dims::Round {
            diameter_in: Decimal::from(diameter),
        })
        .to_f64()
        .unwrap()
    }

    #[test]
    fn round_area_matches_pi_r_squared() {
        for d in [0i64, 6, 8, 10, 100] {
            let expected = std::f64::consts::PI * (d as f64 / 2.0).powi(2);
            assert!(
                (round_area(d) - expected).abs() < 1e-6,
                "diameter {d}: got {}, want {expected}",
                round_area(d)
            );
        }
    }

    #[test]
    fn sheet_area_is_exact() {
        let area = area_square_inches(&Dims::Sheet {
            length_in: Decimal::from(13),
            width_in: Decimal::from(9),
        });
        assert_eq!(area, Decimal::from(117));

        let area = area_square_inches(&Dims::Sheet {
            length_in: Decimal::from_str("12.5").unwrap(),
            width_in: Decimal::from_str("0.4").unwrap(),
        });
        assert_eq!(area, Decimal::from_str("5.000").unwrap());
    }

    #[test]
    fn parse_reads_round_payload() {
        let dims = parse_dimensions(r#"{"roundDiameterIn": 10}"#).unwrap();
        assert_eq!(
            dims,
            Dims::Round {
                diameter_in: Decimal::from(10)
            }
        );
    }

    #[test]
    fn parse_reads_sheet_payload_and_ignores_extras() {
        let dims = parse_dimensions(r#"{"lengthIn": 12, "widthIn": 9, "depthIn": 3}"#).unwrap();
        assert_eq!(
            dims,
            Dims::Sheet {
                length_in: Decimal::from(12),
                width_in: Decimal::from(9)
            }
        );
    }

    #[test]
    fn round_wins_over_sheet_keys() {
        let dims =
            parse_dimensions(r#"{"roundDiameterIn": 8, "lengthIn": 12, "widthIn": 9}"#).unwrap();
        assert!(matches!(dims, Dims::Round { .. }));
    }

    #[test]
    fn unusable_payloads_yield_no_descriptor() {
        assert!(parse_dimensions("not json").is_none());
        assert!(parse_dimensions("{}").is_none());
        assert!(parse_dimensions(r#"{"lengthIn": 12}"#).is_none());
        assert!(parse_dimensions(r#"{"heightIn": 4}"#).is_none());
        assert!(parse_dimensions("[1, 2]").is_none());
    }
}

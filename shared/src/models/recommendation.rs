//! Fertilizer recommendation model and decision rules

use serde::{Deserialize, Serialize};

use crate::models::{SoilCropEntry, WeatherSnapshot};

/// Nitrogen level below which Urea is recommended (kg/ha)
pub const NITROGEN_THRESHOLD: f64 = 280.0;

/// Phosphorus level below which Single Super Phosphate is recommended (kg/ha)
pub const PHOSPHORUS_THRESHOLD: f64 = 10.0;

/// Potassium level below which Muriate of Potash is recommended (kg/ha)
pub const POTASSIUM_THRESHOLD: f64 = 110.0;

/// Fertilizers the engine can recommend, serialized under their market names
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Fertilizer {
    Urea,
    #[serde(rename = "Single Super Phosphate")]
    SingleSuperPhosphate,
    #[serde(rename = "Muriate of Potash")]
    MuriateOfPotash,
}

impl std::fmt::Display for Fertilizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fertilizer::Urea => write!(f, "Urea"),
            Fertilizer::SingleSuperPhosphate => write!(f, "Single Super Phosphate"),
            Fertilizer::MuriateOfPotash => write!(f, "Muriate of Potash"),
        }
    }
}

/// Apply the fixed domain thresholds to a reference entry.
///
/// Each rule fires independently; the returned list is always in the order
/// Urea, Single Super Phosphate, Muriate of Potash regardless of which
/// subset is included. No interpolation, no unit conversion.
pub fn recommended_fertilizers(entry: &SoilCropEntry) -> Vec<Fertilizer> {
    let mut fertilizers = Vec::new();

    if entry.available_nitrogen < NITROGEN_THRESHOLD {
        fertilizers.push(Fertilizer::Urea);
    }
    if entry.available_phosphorus < PHOSPHORUS_THRESHOLD {
        fertilizers.push(Fertilizer::SingleSuperPhosphate);
    }
    if entry.exchangeable_potassium < POTASSIUM_THRESHOLD {
        fertilizers.push(Fertilizer::MuriateOfPotash);
    }

    fertilizers
}

/// Assembled recommendation for a single request.
///
/// Only constructed once the reference lookup succeeded and the weather
/// snapshot status is `ok`; the farmer message is attached after assembly and
/// the value is never mutated otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub fertilizers: Vec<Fertilizer>,
    pub land_size_m2: f64,
    pub fallow_years: u32,
    pub weather: WeatherSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: f64, p: f64, k: f64) -> SoilCropEntry {
        SoilCropEntry {
            soil_type: "Red".to_string(),
            crop_type: "Rice".to_string(),
            available_nitrogen: n,
            available_phosphorus: p,
            exchangeable_potassium: k,
        }
    }

    #[test]
    fn all_three_fertilizers_below_thresholds() {
        let fertilizers = recommended_fertilizers(&entry(250.0, 8.0, 100.0));
        assert_eq!(
            fertilizers,
            vec![
                Fertilizer::Urea,
                Fertilizer::SingleSuperPhosphate,
                Fertilizer::MuriateOfPotash,
            ]
        );
    }

    #[test]
    fn no_fertilizers_at_or_above_thresholds() {
        assert!(recommended_fertilizers(&entry(300.0, 12.0, 120.0)).is_empty());
        // Threshold values themselves do not fire
        assert!(recommended_fertilizers(&entry(280.0, 10.0, 110.0)).is_empty());
    }

    #[test]
    fn rules_fire_independently() {
        let fertilizers = recommended_fertilizers(&entry(250.0, 12.0, 100.0));
        assert_eq!(
            fertilizers,
            vec![Fertilizer::Urea, Fertilizer::MuriateOfPotash]
        );
    }

    #[test]
    fn fertilizer_serializes_under_market_name() {
        let json = serde_json::to_value(Fertilizer::SingleSuperPhosphate).unwrap();
        assert_eq!(json, "Single Super Phosphate");
        assert_eq!(Fertilizer::MuriateOfPotash.to_string(), "Muriate of Potash");
    }
}

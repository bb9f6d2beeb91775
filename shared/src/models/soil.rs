//! Soil-nutrient reference data

use serde::{Deserialize, Serialize};

/// Baseline nutrient levels for a (soil type, crop type) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilCropEntry {
    pub soil_type: String,
    pub crop_type: String,
    /// Available nitrogen (kg/ha)
    pub available_nitrogen: f64,
    /// Available phosphorus (kg/ha)
    pub available_phosphorus: f64,
    /// Exchangeable potassium (kg/ha)
    pub exchangeable_potassium: f64,
}

/// Static soil/crop to nutrient-level dataset, loaded once at process start
/// and injected into the recommendation engine as a read-only handle.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: Vec<SoilCropEntry>,
}

impl ReferenceTable {
    /// Build a table from an explicit set of entries (fixture tables in tests)
    pub fn from_entries(entries: Vec<SoilCropEntry>) -> Self {
        Self { entries }
    }

    /// The built-in reference dataset
    pub fn builtin() -> Self {
        let rows = [
            ("Red", "Rice", 250.0, 8.0, 100.0),
            ("Black", "Cotton", 300.0, 12.0, 120.0),
            ("Sandy", "Maize", 200.0, 6.0, 80.0),
            ("Clay", "Wheat", 220.0, 9.0, 90.0),
            ("Loamy", "Sugarcane", 280.0, 11.0, 110.0),
        ];

        let entries = rows
            .into_iter()
            .map(|(soil, crop, n, p, k)| SoilCropEntry {
                soil_type: soil.to_string(),
                crop_type: crop.to_string(),
                available_nitrogen: n,
                available_phosphorus: p,
                exchangeable_potassium: k,
            })
            .collect();

        Self { entries }
    }

    /// Exact, case-sensitive match on both keys; first matching entry wins.
    /// The built-in dataset is duplicate-free.
    pub fn lookup(&self, soil_type: &str, crop_type: &str) -> Option<&SoilCropEntry> {
        self.entries
            .iter()
            .find(|e| e.soil_type == soil_type && e.crop_type == crop_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SoilCropEntry] {
        &self.entries
    }
}

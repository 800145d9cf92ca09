//! NAQI severity buckets.
//! Six ordered categories with inclusive upper bounds, matching the
//! Indian National Air Quality Index scale.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NaqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl NaqiCategory {
    /// Classify a NAQI value. Boundary values fall into the lower bucket.
    pub fn from_value(naqi: f64) -> Self {
        if naqi <= 50.0 {
            NaqiCategory::Good
        } else if naqi <= 100.0 {
            NaqiCategory::Satisfactory
        } else if naqi <= 200.0 {
            NaqiCategory::Moderate
        } else if naqi <= 300.0 {
            NaqiCategory::Poor
        } else if naqi <= 400.0 {
            NaqiCategory::VeryPoor
        } else {
            NaqiCategory::Severe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NaqiCategory::Good => "Good",
            NaqiCategory::Satisfactory => "Satisfactory",
            NaqiCategory::Moderate => "Moderate",
            NaqiCategory::Poor => "Poor",
            NaqiCategory::VeryPoor => "Very Poor",
            NaqiCategory::Severe => "Severe",
        }
    }
}

impl std::fmt::Display for NaqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

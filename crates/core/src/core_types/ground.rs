//! Ground surface classification for the acoustic ground-effect term
//!
//! ISO 9613-2 characterizes ground by a single factor G ∈ [0, 1], from fully
//! reflective (G = 0) to fully porous (G = 1).

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ground surface class between source and receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundType {
    /// Paving, water, concrete (G = 0)
    Hard,
    /// Grass, trees, vegetation (G = 1)
    Porous,
    /// Mixed hard and soft (G = 0.5); the lenient default
    Mixed,
    /// Desert sand (G = 0.7)
    Sand,
    /// Snow, moss (G = 1)
    VerySoft,
}

impl GroundType {
    /// Ground factor G ∈ [0, 1]
    #[must_use]
    pub const fn ground_factor(self) -> f64 {
        match self {
            GroundType::Hard => 0.0,
            GroundType::Mixed => 0.5,
            GroundType::Sand => 0.7,
            GroundType::Porous | GroundType::VerySoft => 1.0,
        }
    }

    /// Human-readable description for reports
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            GroundType::Hard => "Paving, water, concrete",
            GroundType::Porous => "Grass, trees, vegetation",
            GroundType::Mixed => "Mixed hard and soft",
            GroundType::Sand => "Desert sand",
            GroundType::VerySoft => "Snow, moss",
        }
    }

    /// Parse a ground-type name, falling back to `Mixed` for unrecognized
    /// input (preserved leniency, logged)
    #[must_use]
    pub fn from_name_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "hard" => GroundType::Hard,
            "porous" => GroundType::Porous,
            "mixed" => GroundType::Mixed,
            "sand" => GroundType::Sand,
            "very_soft" | "very soft" => GroundType::VerySoft,
            _ => {
                warn!(name, "unrecognized ground type, defaulting to mixed");
                GroundType::Mixed
            }
        }
    }
}

impl Default for GroundType {
    fn default() -> Self {
        GroundType::Mixed
    }
}

//! Engine output records
//!
//! Pure value records; never mutated after creation and never persisted by
//! this core.

use crate::core_types::source::Pollutant;
use crate::core_types::spatial::LatLon;
use serde::{Deserialize, Serialize};

/// A single concentration evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationResult {
    /// Receptor the value was evaluated at
    pub receptor_id: String,
    /// Pollutant species
    pub pollutant: Pollutant,
    /// Ground-level concentration (µg/m³)
    pub concentration: f64,
}

/// A single noise evaluation: octave-band levels plus the A-weighted total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseResult {
    /// Sound pressure level per octave band (dB), 63 Hz – 8 kHz
    pub band_levels: [f64; 8],
    /// Overall A-weighted equivalent level (dBA)
    pub la_eq: f64,
}

/// Maximum impact of one pollutant over a study domain, as handed to the
/// compliance adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantImpact {
    /// Pollutant species
    pub pollutant: Pollutant,
    /// Maximum predicted concentration (µg/m³)
    pub maximum: f64,
    /// Location of the maximum, when known
    pub location: Option<LatLon>,
}

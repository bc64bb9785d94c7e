//! Emission and noise source records
//!
//! Immutable value records created per evaluation call. Emission rates and
//! sound power levels are non-negative by construction convention; the
//! adapter boundary rejects negative magnitudes before they reach the
//! engines.

use crate::core_types::spatial::LatLon;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Pollutant species tracked by the dispersion engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    /// Particulate matter ≤ 10 µm
    Pm10,
    /// Particulate matter ≤ 2.5 µm
    Pm25,
    /// Nitrogen dioxide
    No2,
    /// Sulfur dioxide
    So2,
    /// Carbon monoxide
    Co,
}

impl Pollutant {
    /// All tracked species
    pub const ALL: [Pollutant; 5] = [
        Pollutant::Pm10,
        Pollutant::Pm25,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
    ];

    /// Short lowercase identifier as used in regulatory tables
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Pollutant::Pm10 => "pm10",
            Pollutant::Pm25 => "pm25",
            Pollutant::No2 => "no2",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
        }
    }
}

/// Geometry class of an emission source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// Stack or single exhaust point
    Point,
    /// Distributed surface source (e.g. construction dust)
    Area,
    /// Extended linear source (e.g. haul road)
    Line,
    /// Volume source
    Volume,
}

/// Air pollutant emission source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSource {
    /// Source identifier for reporting
    pub id: String,
    /// Geometry class
    pub kind: SourceKind,
    /// Source location
    pub location: LatLon,
    /// Release height above ground (m)
    pub height: f64,
    /// Stack diameter (m)
    pub diameter: f64,
    /// Exit gas temperature (K)
    pub exit_temperature: f64,
    /// Exit gas velocity (m/s)
    pub exit_velocity: f64,
    /// Emission rate per pollutant (g/s, non-negative)
    pub emission_rates: FxHashMap<Pollutant, f64>,
}

impl EmissionSource {
    /// Emission rate for a pollutant, or 0 when the source does not emit it
    ///
    /// A zero here short-circuits the dispersion calculation to a zero
    /// concentration — a valid physical result, not an error.
    #[must_use]
    pub fn emission_rate(&self, pollutant: Pollutant) -> f64 {
        self.emission_rates.get(&pollutant).copied().unwrap_or(0.0)
    }
}

/// Geometry class of a noise source, selecting the divergence law
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseSourceKind {
    /// Compact source, spherical spreading
    Point,
    /// Extended linear source (road), cylindrical spreading
    Line,
    /// Extended surface source, two-region near/far rule
    Area,
}

/// Fixed octave-band spectrum shape templates
///
/// When a source carries no measured spectrum, one is derived from the
/// overall sound power level using one of these shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectrumShape {
    /// Flat mid-band energy (general machinery)
    Broadband,
    /// Energy concentrated below 250 Hz (diesel engines, trucks)
    LowFrequency,
    /// Impulsive sources (pile drivers, jackhammers)
    Impact,
    /// Discrete-tone dominated (compressors, generators)
    Tonal,
}

impl SpectrumShape {
    /// Per-band offsets (dB) applied to the overall level, 63 Hz – 8 kHz
    #[must_use]
    pub const fn band_offsets(self) -> [f64; 8] {
        match self {
            SpectrumShape::Broadband => [-8.0, -4.0, -1.0, 0.0, 0.0, -1.0, -4.0, -8.0],
            SpectrumShape::LowFrequency => [0.0, 0.0, -2.0, -4.0, -8.0, -12.0, -16.0, -20.0],
            SpectrumShape::Impact => [-4.0, -2.0, 0.0, 0.0, -2.0, -4.0, -8.0, -12.0],
            SpectrumShape::Tonal => [-10.0, -8.0, -4.0, 0.0, 0.0, -4.0, -10.0, -15.0],
        }
    }
}

/// Working period used for operating hours and noise limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkPeriod {
    /// 07:00–19:00
    Day,
    /// 19:00–23:00
    Evening,
    /// 23:00–07:00
    Night,
}

impl WorkPeriod {
    /// All periods in diurnal order
    pub const ALL: [WorkPeriod; 3] = [WorkPeriod::Day, WorkPeriod::Evening, WorkPeriod::Night];
}

/// Outdoor noise source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseSource {
    /// Source identifier for reporting
    pub id: String,
    /// Geometry class
    pub kind: NoiseSourceKind,
    /// Source location
    pub location: LatLon,
    /// Source height above ground (m)
    pub height: f64,
    /// Overall sound power level Lw (dB re 1 pW, non-negative); quantity and
    /// usage factors are already folded in by the adapter
    pub sound_power_level: f64,
    /// Measured octave-band spectrum (dB), 63 Hz – 8 kHz, when available
    pub spectrum: Option<[f64; 8]>,
    /// Shape template used when no measured spectrum is present
    pub shape: SpectrumShape,
    /// Operating hours per period, as (start, end) hours of day
    pub operating_hours: FxHashMap<WorkPeriod, (u8, u8)>,
}

impl NoiseSource {
    /// Build a plain point source with template-derived spectrum
    #[must_use]
    pub fn point(id: impl Into<String>, location: LatLon, height: f64, lw: f64) -> Self {
        NoiseSource {
            id: id.into(),
            kind: NoiseSourceKind::Point,
            location,
            height,
            sound_power_level: lw,
            spectrum: None,
            shape: SpectrumShape::Broadband,
            operating_hours: FxHashMap::default(),
        }
    }
}

/// Noise barrier or screening building edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseBarrier {
    /// Barrier identifier
    pub id: String,
    /// One end of the barrier in plan view
    pub start: LatLon,
    /// Other end of the barrier in plan view
    pub end: LatLon,
    /// Barrier height above ground (m)
    pub height: f64,
    /// Transmission loss through the barrier material (dB)
    pub transmission_loss: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pollutant_rate_is_zero() {
        let source = EmissionSource {
            id: "stack_1".to_string(),
            kind: SourceKind::Point,
            location: LatLon::new(25.0, 55.0),
            height: 20.0,
            diameter: 1.0,
            exit_temperature: 400.0,
            exit_velocity: 15.0,
            emission_rates: [(Pollutant::Pm10, 2.0)].into_iter().collect(),
        };
        assert_eq!(source.emission_rate(Pollutant::Pm10), 2.0);
        assert_eq!(source.emission_rate(Pollutant::So2), 0.0);
    }

    #[test]
    fn test_spectrum_shapes_peak_location() {
        // Low frequency template peaks in the lowest bands
        let low = SpectrumShape::LowFrequency.band_offsets();
        assert_eq!(low[0], 0.0);
        assert!(low[7] < low[0]);

        // Broadband template peaks mid-band
        let broad = SpectrumShape::Broadband.band_offsets();
        assert_eq!(broad[3], 0.0);
        assert!(broad[0] < broad[3]);
    }
}

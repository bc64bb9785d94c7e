//! Injected configuration and lookup tables
//!
//! Every empirical table the engines consult lives here rather than as a
//! module-level global: Pasquill–Gifford dispersion parameters, octave-band
//! absorption coefficients, A-weighting offsets, equipment emission factors
//! and sound power levels, and regulatory limit tables. The `Default` impls
//! carry the reference values; regional overrides are plain modified
//! instances.

use crate::core_types::source::{Pollutant, SpectrumShape, WorkPeriod};
use crate::core_types::project::EquipmentKind;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Power-law coefficient pair for one stability class
///
/// `σ = a · x_km^b · 1000` meters, evaluated separately for the horizontal
/// (y) and vertical (z) directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PasquillGifford {
    /// Horizontal coefficient
    pub ay: f64,
    /// Horizontal exponent
    pub by: f64,
    /// Vertical coefficient
    pub az: f64,
    /// Vertical exponent
    pub bz: f64,
}

/// Dispersion engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispersionConfig {
    /// Pasquill–Gifford parameters indexed by stability class A–F
    ///
    /// Rural open-terrain curves; most study areas here are desert.
    pub pg_params: [PasquillGifford; 6],
    /// Wind speed floor (m/s) preventing the plume-equation singularity
    pub min_wind_speed: f64,
    /// Surface roughness length (m); open desert terrain
    pub surface_roughness: f64,
    /// Daytime mixing height used for the σz cap (m)
    pub mixing_height_day: f64,
    /// Nighttime mixing height (m)
    pub mixing_height_night: f64,
}

impl Default for DispersionConfig {
    fn default() -> Self {
        DispersionConfig {
            pg_params: [
                // A: very unstable
                PasquillGifford { ay: 0.22, by: 0.894, az: 0.20, bz: 0.894 },
                // B: unstable
                PasquillGifford { ay: 0.16, by: 0.894, az: 0.12, bz: 0.894 },
                // C: slightly unstable
                PasquillGifford { ay: 0.11, by: 0.894, az: 0.08, bz: 0.894 },
                // D: neutral
                PasquillGifford { ay: 0.08, by: 0.894, az: 0.06, bz: 0.894 },
                // E: slightly stable
                PasquillGifford { ay: 0.06, by: 0.894, az: 0.03, bz: 0.9 },
                // F: stable
                PasquillGifford { ay: 0.04, by: 0.894, az: 0.016, bz: 0.9 },
            ],
            min_wind_speed: 0.5,
            surface_roughness: 0.01,
            mixing_height_day: 2000.0,
            mixing_height_night: 300.0,
        }
    }
}

/// Averaging periods appearing in ambient air-quality standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AveragingPeriod {
    /// 1-hour average
    OneHour,
    /// 8-hour average
    EightHour,
    /// 24-hour average
    TwentyFourHour,
    /// Annual average
    Annual,
}

impl AveragingPeriod {
    /// Label used in findings tables
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AveragingPeriod::OneHour => "1hr",
            AveragingPeriod::EightHour => "8hr",
            AveragingPeriod::TwentyFourHour => "24hr",
            AveragingPeriod::Annual => "annual",
        }
    }
}

/// Ambient air-quality standards (µg/m³) per pollutant and averaging period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityStandards {
    limits: FxHashMap<Pollutant, Vec<(AveragingPeriod, f64)>>,
}

impl AirQualityStandards {
    /// Build from explicit entries
    #[must_use]
    pub fn new(limits: FxHashMap<Pollutant, Vec<(AveragingPeriod, f64)>>) -> Self {
        AirQualityStandards { limits }
    }

    /// Limit for one pollutant/period combination, if defined
    #[must_use]
    pub fn limit(&self, pollutant: Pollutant, period: AveragingPeriod) -> Option<f64> {
        self.limits
            .get(&pollutant)?
            .iter()
            .find(|(p, _)| *p == period)
            .map(|(_, v)| *v)
    }

    /// All limits applicable to one pollutant
    #[must_use]
    pub fn limits_for(&self, pollutant: Pollutant) -> &[(AveragingPeriod, f64)] {
        self.limits.get(&pollutant).map_or(&[], Vec::as_slice)
    }
}

impl Default for AirQualityStandards {
    fn default() -> Self {
        let mut limits = FxHashMap::default();
        limits.insert(
            Pollutant::Pm10,
            vec![
                (AveragingPeriod::TwentyFourHour, 150.0),
                (AveragingPeriod::Annual, 50.0),
            ],
        );
        limits.insert(
            Pollutant::Pm25,
            vec![
                (AveragingPeriod::TwentyFourHour, 65.0),
                (AveragingPeriod::Annual, 15.0),
            ],
        );
        limits.insert(
            Pollutant::No2,
            vec![
                (AveragingPeriod::OneHour, 200.0),
                (AveragingPeriod::Annual, 40.0),
            ],
        );
        limits.insert(
            Pollutant::So2,
            vec![
                (AveragingPeriod::TwentyFourHour, 125.0),
                (AveragingPeriod::Annual, 60.0),
            ],
        );
        limits.insert(
            Pollutant::Co,
            vec![(AveragingPeriod::EightHour, 10_000.0)],
        );
        AirQualityStandards { limits }
    }
}

/// Acoustic engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticsConfig {
    /// Base atmospheric absorption per band (dB/km) at 20 °C / 70 % RH
    pub absorption_db_per_km: [f64; 8],
    /// A-weighting offsets per band (dB)
    pub a_weighting_db: [f64; 8],
    /// Frequency weights for the ground-effect term
    pub ground_frequency_weights: [f64; 8],
    /// Assumed diffraction path-length difference (m) for screening barriers
    ///
    /// Inherited simplification; a full implementation would derive this per
    /// barrier from the source/receiver/crest geometry.
    pub assumed_path_difference_m: f64,
    /// Hard cap on barrier attenuation (dB)
    pub max_barrier_attenuation_db: f64,
    /// Distance beyond which the vegetation term applies (m)
    pub vegetation_onset_m: f64,
    /// Cap on the vegetation term (dB)
    pub max_vegetation_attenuation_db: f64,
    /// Wind speed above which the downwind enhancement applies (m/s)
    pub downwind_threshold_ms: f64,
    /// Downwind enhancement correction (dB, negative = level increase)
    pub downwind_correction_db: f64,
}

impl Default for AcousticsConfig {
    fn default() -> Self {
        AcousticsConfig {
            absorption_db_per_km: [0.1, 0.4, 1.0, 1.9, 3.7, 9.7, 32.8, 117.0],
            a_weighting_db: [-26.2, -16.1, -8.6, -3.2, 0.0, 1.2, 1.0, -1.1],
            ground_frequency_weights: [1.5, 1.5, 1.5, 1.5, 1.0, 0.5, 0.0, 0.0],
            assumed_path_difference_m: 5.0,
            max_barrier_attenuation_db: 20.0,
            vegetation_onset_m: 100.0,
            max_vegetation_attenuation_db: 10.0,
            downwind_threshold_ms: 5.0,
            downwind_correction_db: -2.0,
        }
    }
}

/// Jurisdiction whose ambient noise limits apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// United Arab Emirates
    Uae,
    /// Kingdom of Saudi Arabia
    Ksa,
}

/// Land-use zone of a sensitive receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Residential zoning
    Residential,
    /// Commercial zoning
    Commercial,
    /// Industrial zoning
    Industrial,
}

/// Ambient noise limits (`LAeq`, dBA) per jurisdiction, zone, and period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseLimits {
    limits: FxHashMap<(Jurisdiction, ZoneKind, WorkPeriod), f64>,
    /// Fallback when no table entry exists (preserved leniency: original
    /// behavior defaulted to the residential daytime limit)
    pub fallback_db: f64,
}

impl NoiseLimits {
    /// Applicable limit, falling back to the configured default
    #[must_use]
    pub fn limit(&self, jurisdiction: Jurisdiction, zone: ZoneKind, period: WorkPeriod) -> f64 {
        self.limits
            .get(&(jurisdiction, zone, period))
            .copied()
            .unwrap_or(self.fallback_db)
    }
}

impl Default for NoiseLimits {
    fn default() -> Self {
        let mut limits = FxHashMap::default();
        let entries = [
            (Jurisdiction::Uae, ZoneKind::Residential, [55.0, 50.0, 45.0]),
            (Jurisdiction::Uae, ZoneKind::Commercial, [65.0, 60.0, 55.0]),
            (Jurisdiction::Uae, ZoneKind::Industrial, [70.0, 70.0, 70.0]),
            (Jurisdiction::Ksa, ZoneKind::Residential, [55.0, 50.0, 45.0]),
            (Jurisdiction::Ksa, ZoneKind::Commercial, [60.0, 55.0, 50.0]),
            (Jurisdiction::Ksa, ZoneKind::Industrial, [70.0, 65.0, 60.0]),
        ];
        for (jurisdiction, zone, [day, evening, night]) in entries {
            limits.insert((jurisdiction, zone, WorkPeriod::Day), day);
            limits.insert((jurisdiction, zone, WorkPeriod::Evening), evening);
            limits.insert((jurisdiction, zone, WorkPeriod::Night), night);
        }
        NoiseLimits {
            limits,
            fallback_db: 55.0,
        }
    }
}

/// Per-equipment-class emission factors and sound power levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDataset {
    /// Exhaust emission factors (g/hr) per pollutant
    emission_factors: FxHashMap<EquipmentKind, Vec<(Pollutant, f64)>>,
    /// Sound power level (dB) and spectrum shape
    noise_levels: FxHashMap<EquipmentKind, (f64, SpectrumShape)>,
}

impl EquipmentDataset {
    /// Emission factors (g/hr) for an equipment class
    ///
    /// Unlisted classes fall back to the truck factors (preserved leniency).
    #[must_use]
    pub fn emission_factors(&self, kind: EquipmentKind) -> &[(Pollutant, f64)] {
        self.emission_factors
            .get(&kind)
            .or_else(|| self.emission_factors.get(&EquipmentKind::Truck))
            .map_or(&[], Vec::as_slice)
    }

    /// Sound power level (dB) and spectrum shape for an equipment class
    ///
    /// Unlisted classes fall back to 100 dB broadband (preserved leniency).
    #[must_use]
    pub fn noise_level(&self, kind: EquipmentKind) -> (f64, SpectrumShape) {
        self.noise_levels
            .get(&kind)
            .copied()
            .unwrap_or((100.0, SpectrumShape::Broadband))
    }
}

impl Default for EquipmentDataset {
    fn default() -> Self {
        let mut emission_factors = FxHashMap::default();
        emission_factors.insert(
            EquipmentKind::Excavator,
            vec![
                (Pollutant::Pm10, 0.5),
                (Pollutant::Pm25, 0.3),
                (Pollutant::No2, 2.0),
                (Pollutant::Co, 5.0),
            ],
        );
        emission_factors.insert(
            EquipmentKind::Bulldozer,
            vec![
                (Pollutant::Pm10, 0.7),
                (Pollutant::Pm25, 0.4),
                (Pollutant::No2, 2.5),
                (Pollutant::Co, 6.0),
            ],
        );
        emission_factors.insert(
            EquipmentKind::Crane,
            vec![
                (Pollutant::Pm10, 0.3),
                (Pollutant::Pm25, 0.2),
                (Pollutant::No2, 1.5),
                (Pollutant::Co, 3.0),
            ],
        );
        emission_factors.insert(
            EquipmentKind::Generator,
            vec![
                (Pollutant::Pm10, 0.2),
                (Pollutant::Pm25, 0.1),
                (Pollutant::No2, 3.0),
                (Pollutant::So2, 0.5),
            ],
        );
        emission_factors.insert(
            EquipmentKind::Truck,
            vec![
                (Pollutant::Pm10, 0.4),
                (Pollutant::Pm25, 0.2),
                (Pollutant::No2, 1.8),
                (Pollutant::Co, 4.0),
            ],
        );

        let mut noise_levels = FxHashMap::default();
        noise_levels.insert(EquipmentKind::Excavator, (105.0, SpectrumShape::Broadband));
        noise_levels.insert(EquipmentKind::Bulldozer, (108.0, SpectrumShape::LowFrequency));
        noise_levels.insert(EquipmentKind::Jackhammer, (110.0, SpectrumShape::Impact));
        noise_levels.insert(EquipmentKind::Crane, (96.0, SpectrumShape::Broadband));
        noise_levels.insert(EquipmentKind::ConcreteMixer, (90.0, SpectrumShape::Broadband));
        noise_levels.insert(EquipmentKind::PileDriver, (115.0, SpectrumShape::Impact));
        noise_levels.insert(EquipmentKind::Compressor, (98.0, SpectrumShape::Tonal));
        noise_levels.insert(EquipmentKind::Generator, (95.0, SpectrumShape::Tonal));
        noise_levels.insert(EquipmentKind::Truck, (88.0, SpectrumShape::LowFrequency));
        noise_levels.insert(EquipmentKind::ConcretePump, (106.0, SpectrumShape::Broadband));

        EquipmentDataset {
            emission_factors,
            noise_levels,
        }
    }
}

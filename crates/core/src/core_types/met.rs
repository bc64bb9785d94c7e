//! Meteorological state and Pasquill stability classification
//!
//! One [`MeteorologicalState`] is a single evaluation snapshot; an hourly
//! series is an ordered sequence of independent [`MetRecord`] snapshots.
//! The engines never fetch meteorological data — callers supply observed or
//! synthesized records (see [`crate::core_types::synthetic`]).

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Nominal number of hourly records in one year
///
/// Series longer than this are stride-sampled down before statistical
/// reduction (performance/accuracy trade-off, not a correctness requirement).
pub const HOURS_PER_YEAR: usize = 8_760;

/// Pasquill–Gifford atmospheric stability class
///
/// Categorical classification of atmospheric turbulence, from very unstable
/// (A, strong daytime convection) to stable (F, calm clear nights). The class
/// selects the power-law dispersion coefficient pair used by the plume model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StabilityClass {
    /// Very unstable (strong insolation, light wind)
    A,
    /// Unstable
    B,
    /// Slightly unstable
    C,
    /// Neutral (overcast or strong wind); the lenient default
    D,
    /// Slightly stable
    E,
    /// Stable (clear night, light wind)
    F,
}

impl StabilityClass {
    /// All six classes in order, for table indexing
    pub const ALL: [StabilityClass; 6] = [
        StabilityClass::A,
        StabilityClass::B,
        StabilityClass::C,
        StabilityClass::D,
        StabilityClass::E,
        StabilityClass::F,
    ];

    /// Index into six-element lookup tables (A = 0 .. F = 5)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            StabilityClass::A => 0,
            StabilityClass::B => 1,
            StabilityClass::C => 2,
            StabilityClass::D => 3,
            StabilityClass::E => 4,
            StabilityClass::F => 5,
        }
    }

    /// Single-letter code
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            StabilityClass::A => 'A',
            StabilityClass::B => 'B',
            StabilityClass::C => 'C',
            StabilityClass::D => 'D',
            StabilityClass::E => 'E',
            StabilityClass::F => 'F',
        }
    }

    /// Parse a class code, falling back to neutral `D` for unrecognized input
    ///
    /// This preserves the lenient-default behavior required for output parity
    /// with existing reports. The correction is logged so upstream data
    /// errors are not silently masked.
    #[must_use]
    pub fn from_code_lenient(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            warn!(code, "unrecognized stability class, defaulting to neutral D");
            StabilityClass::D
        })
    }

    /// Derive the stability class from time of day and wind speed
    ///
    /// Simplified scheme: daytime hours (10:00–16:00) map light winds to the
    /// unstable classes, nighttime maps them to the stable classes, and
    /// anything windy is neutral. A full determination would also use solar
    /// radiation and cloud cover.
    #[must_use]
    pub fn from_conditions(hour: u8, wind_speed_ms: f64) -> Self {
        let daytime = (10..=16).contains(&hour);
        if daytime {
            match wind_speed_ms {
                w if w < 2.0 => StabilityClass::A,
                w if w < 3.0 => StabilityClass::B,
                w if w < 5.0 => StabilityClass::C,
                _ => StabilityClass::D,
            }
        } else {
            match wind_speed_ms {
                w if w < 2.0 => StabilityClass::F,
                w if w < 3.0 => StabilityClass::E,
                _ => StabilityClass::D,
            }
        }
    }
}

impl FromStr for StabilityClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(StabilityClass::A),
            "B" | "b" => Ok(StabilityClass::B),
            "C" | "c" => Ok(StabilityClass::C),
            "D" | "d" => Ok(StabilityClass::D),
            "E" | "e" => Ok(StabilityClass::E),
            "F" | "f" => Ok(StabilityClass::F),
            _ => Err(ConfigError::UnknownCode {
                field: "stability_class",
                code: s.to_string(),
            }),
        }
    }
}

/// Meteorological conditions for one evaluation snapshot
///
/// Wind speed is stored as supplied; the dispersion engine floors it at the
/// configured minimum (default 0.5 m/s) at evaluation time to avoid the
/// division singularity in the plume equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeteorologicalState {
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Wind direction (degrees from north, direction wind blows *toward*)
    pub wind_direction: f64,
    /// Air temperature (°C)
    pub temperature: f64,
    /// Atmospheric pressure (hPa)
    pub pressure: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Pasquill stability class
    pub stability: StabilityClass,
    /// Mixing height (m)
    pub mixing_height: f64,
    /// Cloud cover fraction (0–1)
    pub cloud_cover: f64,
}

impl Default for MeteorologicalState {
    fn default() -> Self {
        MeteorologicalState {
            wind_speed: 3.0,
            wind_direction: 0.0,
            temperature: 30.0,
            pressure: 1013.0,
            humidity: 50.0,
            stability: StabilityClass::D,
            mixing_height: 1000.0,
            cloud_cover: 0.5,
        }
    }
}

/// One hour of an observed or synthesized meteorological series
///
/// Optional fields carry documented defaults; the stability class is derived
/// from hour and wind speed when the record is resolved to a state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetRecord {
    /// Hour of day (0–23)
    pub hour: u8,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Wind direction (degrees from north)
    pub wind_direction: f64,
    /// Air temperature (°C)
    pub temperature: f64,
    /// Atmospheric pressure (hPa); defaults to 1013
    pub pressure: Option<f64>,
    /// Relative humidity (%); defaults to 50
    pub humidity: Option<f64>,
    /// Mixing height (m); defaults to 1000
    pub mixing_height: Option<f64>,
    /// Cloud cover fraction (0–1); defaults to 0.5
    pub cloud_cover: Option<f64>,
}

impl MetRecord {
    /// Resolve the record into a full evaluation snapshot
    #[must_use]
    pub fn to_state(&self) -> MeteorologicalState {
        MeteorologicalState {
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            temperature: self.temperature,
            pressure: self.pressure.unwrap_or(1013.0),
            humidity: self.humidity.unwrap_or(50.0),
            stability: StabilityClass::from_conditions(self.hour, self.wind_speed),
            mixing_height: self.mixing_height.unwrap_or(1000.0),
            cloud_cover: self.cloud_cover.unwrap_or(0.5),
        }
    }
}

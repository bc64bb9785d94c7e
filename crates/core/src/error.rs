//! Error types for the modeling core
//!
//! The pure engine functions are infallible: malformed numeric inputs are
//! defensively clamped (see the leniency policies documented on the engines).
//! Errors only arise at configuration boundaries, before any physics runs:
//! degenerate grid definitions, empty meteorological series, and structurally
//! invalid project descriptions. A zero engine result is a valid physical
//! outcome, never an error.

use std::fmt;

/// Errors raised by grid construction and adapter-boundary validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid bounds are inverted or non-finite (`lat_min >= lat_max` or
    /// `lon_min >= lon_max`)
    InvalidBounds {
        /// Southern boundary (degrees)
        lat_min: f64,
        /// Northern boundary (degrees)
        lat_max: f64,
        /// Western boundary (degrees)
        lon_min: f64,
        /// Eastern boundary (degrees)
        lon_max: f64,
    },
    /// Grid resolution is zero, negative, or non-finite
    InvalidResolution(f64),
    /// A meteorological series was empty where at least one record is required
    EmptySeries,
    /// A structural input field holds a value the adapter refuses to pass on
    /// to the engines (non-finite, negative where a magnitude is required)
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// A categorical code failed strict parsing
    UnknownCode {
        /// Name of the offending field
        field: &'static str,
        /// The rejected code
        code: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBounds {
                lat_min,
                lat_max,
                lon_min,
                lon_max,
            } => write!(
                f,
                "invalid grid bounds: lat [{lat_min}, {lat_max}], lon [{lon_min}, {lon_max}]"
            ),
            ConfigError::InvalidResolution(r) => {
                write!(f, "invalid grid resolution: {r} m (must be positive and finite)")
            }
            ConfigError::EmptySeries => {
                write!(f, "meteorological series is empty")
            }
            ConfigError::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value}")
            }
            ConfigError::UnknownCode { field, code } => {
                write!(f, "unknown code for {field}: {code:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

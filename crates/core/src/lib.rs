//! Environmental Impact Modeling Core
//!
//! Physical modeling engines for environmental impact assessments in the
//! Gulf region: Gaussian-plume air dispersion, ISO 9613-2 style outdoor
//! noise propagation, grid/contour evaluation, and the adapters that turn a
//! project description into engine sources and engine outputs into
//! regulatory findings.
//!
//! ## Design
//!
//! - Engines are pure functions over immutable value records; all empirical
//!   tables are injected through config structs with reference `Default`s.
//! - Grids and time series parallelize over rayon.
//! - Degenerate configuration fails fast with [`ConfigError`]; physically
//!   awkward inputs (calm wind, tiny distances, unknown equipment) are
//!   clamped or defaulted, each correction logged.

// Shared value records and geographic primitives
pub mod core_types;

// Injected configuration and lookup tables
pub mod config;
pub mod error;

// Modeling engines
pub mod acoustics;
pub mod dispersion;
pub mod grid;

// Boundary adapters
pub mod adapter;
pub mod compliance;

// Re-export core types
pub use core_types::{
    EmissionSource, GroundType, LatLon, MetPattern, MetRecord, MeteorologicalState, NoiseBarrier,
    NoiseResult, NoiseSource, Pollutant, PollutantImpact, Receptor, ReceptorKind, SpectrumShape,
    StabilityClass, WorkPeriod,
};

// Re-export configuration and errors
pub use config::{
    AcousticsConfig, AirQualityStandards, AveragingPeriod, DispersionConfig, EquipmentDataset,
    Jurisdiction, NoiseLimits, ZoneKind,
};
pub use error::ConfigError;

// Re-export engine entry points
pub use acoustics::{
    combined_noise_level, noise_level, predict_construction_noise,
    recommend_mitigation_measures, BudgetTier, MitigationMeasure, NoisePrediction,
    SensitiveReceiver,
};
pub use adapter::{emission_sources_from_project, noise_sources_from_project};
pub use compliance::{assess_air_quality, assess_noise, AirAssessment, NoiseAssessment};
pub use dispersion::{annual_average, concentration, percentiles, receptor_concentrations};
pub use grid::{
    concentration_grid, noise_contours, noise_grid, ConcentrationCell, ContourLine, GridBounds,
    GridSpec, NoiseGrid,
};

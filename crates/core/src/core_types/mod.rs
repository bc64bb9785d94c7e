//! Core value types shared across the engines
//!
//! Everything here is an immutable value record: created per evaluation
//! call, cheap to clone, serializable, and never persisted by this core.

pub mod ground;
pub mod met;
pub mod project;
pub mod receptor;
pub mod results;
pub mod source;
pub mod spatial;
pub mod synthetic;

pub use ground::GroundType;
pub use met::{MetRecord, MeteorologicalState, StabilityClass, HOURS_PER_YEAR};
pub use project::{
    EquipmentItem, EquipmentKind, InstallationSpec, ProjectDescription, StackSpec, TrafficRoute,
};
pub use receptor::{Receptor, ReceptorKind};
pub use results::{ConcentrationResult, NoiseResult, PollutantImpact};
pub use source::{
    EmissionSource, NoiseBarrier, NoiseSource, NoiseSourceKind, Pollutant, SourceKind,
    SpectrumShape, WorkPeriod,
};
pub use spatial::{angular_deviation_deg, LatLon, EARTH_RADIUS_M, MIN_DISTANCE_M};
pub use synthetic::MetPattern;

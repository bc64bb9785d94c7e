//! External project description consumed by the source adapter
//!
//! These records mirror what the surrounding platform knows about a project:
//! an equipment roster, an optional construction footprint, fixed stacks and
//! installations, and traffic routes. The adapter translates them into
//! engine-native [`crate::EmissionSource`] and [`crate::NoiseSource`]
//! records; nothing here carries physics.

use crate::core_types::source::{Pollutant, WorkPeriod};
use crate::core_types::spatial::LatLon;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Construction equipment classes with known emission and noise factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKind {
    /// Tracked excavator
    Excavator,
    /// Bulldozer
    Bulldozer,
    /// Mobile or tower crane
    Crane,
    /// Diesel generator set
    Generator,
    /// Haul or delivery truck
    Truck,
    /// Hand-held jackhammer
    Jackhammer,
    /// Concrete mixer
    ConcreteMixer,
    /// Impact pile driver
    PileDriver,
    /// Air compressor
    Compressor,
    /// Concrete pump
    ConcretePump,
    /// Unlisted equipment; falls back to default factors (preserved leniency)
    Other,
}

/// One equipment line item in the project roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Roster identifier
    pub id: String,
    /// Equipment class
    pub kind: EquipmentKind,
    /// Operating position; `None` means the project center
    pub location: Option<LatLon>,
    /// Source height above ground (m)
    pub height: f64,
    /// Number of identical units (≥ 1); folded into Lw as `10·log10(n)`
    pub quantity: u32,
    /// Fraction of the working period the unit actually runs (0–1]
    pub usage_factor: f64,
    /// Operating hours per day, for emission-rate conversion
    pub hours_per_day: f64,
    /// Whether the unit is permitted to operate at night
    pub night_work: bool,
}

/// A fixed stack (chimney) emission point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSpec {
    /// Stack identifier
    pub id: String,
    /// Stack location
    pub location: LatLon,
    /// Stack height (m)
    pub height: f64,
    /// Stack inner diameter (m)
    pub diameter: f64,
    /// Exit gas temperature (K); `None` defaults to 400 K
    pub exit_temperature: Option<f64>,
    /// Exit gas velocity (m/s); `None` defaults to 15 m/s
    pub exit_velocity: Option<f64>,
    /// Measured emission rates (g/s)
    pub emission_rates: FxHashMap<Pollutant, f64>,
}

/// A fixed noise installation (plant room, HVAC, pump station)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationSpec {
    /// Installation identifier
    pub id: String,
    /// Installation location
    pub location: LatLon,
    /// Source height above ground (m)
    pub height: f64,
    /// Overall sound power level (dB); `None` defaults to 95 dB
    pub sound_power_level: Option<f64>,
    /// Measured octave-band spectrum when available
    pub spectrum: Option<[f64; 8]>,
}

/// A traffic route modeled as a line noise source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRoute {
    /// Route identifier
    pub id: String,
    /// Route centroid (plan-view simplification)
    pub center: LatLon,
    /// Traffic volume (vehicles per hour)
    pub vehicles_per_hour: f64,
}

/// Everything the adapter needs to know about a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectDescription {
    /// Project site center, used when items carry no own location
    pub center: Option<LatLon>,
    /// Construction equipment roster
    pub equipment: Vec<EquipmentItem>,
    /// Active construction footprint (m²) generating fugitive dust
    pub construction_area_m2: Option<f64>,
    /// Fixed emission stacks
    pub stacks: Vec<StackSpec>,
    /// Fixed noise installations
    pub installations: Vec<InstallationSpec>,
    /// Traffic routes
    pub traffic: Vec<TrafficRoute>,
}

/// Default operating-hours map for construction equipment: day and evening
/// work only
#[must_use]
pub fn default_operating_hours() -> FxHashMap<WorkPeriod, (u8, u8)> {
    [(WorkPeriod::Day, (7, 19)), (WorkPeriod::Evening, (19, 23))]
        .into_iter()
        .collect()
}

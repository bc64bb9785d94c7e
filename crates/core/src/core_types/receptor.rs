//! Receptor (receiver) locations
//!
//! A receptor is any point where a concentration or noise level is
//! evaluated. The kind tag is carried through to reporting only and never
//! influences the physics.

use crate::core_types::spatial::LatLon;
use serde::{Deserialize, Serialize};

/// Receptor category, used for reporting only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceptorKind {
    /// Dwellings
    Residential,
    /// Schools and kindergartens
    School,
    /// Hospitals and clinics
    Hospital,
    /// Commercial premises
    Commercial,
    /// Industrial premises
    Industrial,
    /// Synthetic grid evaluation point
    Grid,
    /// Anything else
    Other,
}

/// A point where engine output is evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receptor {
    /// Receptor identifier for reporting
    pub id: String,
    /// Receptor location
    pub location: LatLon,
    /// Height above ground (m); 1.5 m is the conventional breathing/ear height
    pub height: f64,
    /// Category tag (reporting only, not physics)
    pub kind: ReceptorKind,
}

impl Receptor {
    /// Standard evaluation height above ground (m)
    pub const DEFAULT_HEIGHT_M: f64 = 1.5;

    /// Create a synthetic grid-cell receptor at breathing height
    #[must_use]
    pub fn grid_point(lat: f64, lon: f64) -> Self {
        Receptor {
            id: format!("grid_{lat:.6}_{lon:.6}"),
            location: LatLon::new(lat, lon),
            height: Self::DEFAULT_HEIGHT_M,
            kind: ReceptorKind::Grid,
        }
    }
}

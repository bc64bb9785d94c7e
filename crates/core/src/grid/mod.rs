//! Regular lat/lon evaluation grids and contour extraction
//!
//! Both engines evaluate over the same rectangular mesh: a bounding box plus
//! a resolution in meters, converted to degree steps with the longitude step
//! scaled by the cosine of the mid-latitude. Rows are rayon work items.
//! Degenerate bounds or resolutions fail fast; a well-formed grid never
//! fails mid-evaluation.

use crate::acoustics::propagation::combined_noise_level;
use crate::config::{AcousticsConfig, DispersionConfig};
use crate::core_types::ground::GroundType;
use crate::core_types::met::MeteorologicalState;
use crate::core_types::receptor::Receptor;
use crate::core_types::source::{EmissionSource, NoiseBarrier, NoiseSource, Pollutant};
use crate::core_types::spatial::LatLon;
use crate::dispersion::plume::concentration;
use crate::error::ConfigError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Meters per degree of latitude (spherical approximation)
const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// Geographic bounding box of a study grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Southern edge (decimal degrees)
    pub lat_min: f64,
    /// Northern edge (decimal degrees)
    pub lat_max: f64,
    /// Western edge (decimal degrees)
    pub lon_min: f64,
    /// Eastern edge (decimal degrees)
    pub lon_max: f64,
}

/// A validated evaluation mesh: bounds plus cell size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    bounds: GridBounds,
    resolution_m: f64,
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl GridSpec {
    /// Build and validate a mesh
    ///
    /// # Errors
    /// [`ConfigError::InvalidBounds`] when either axis is inverted or empty,
    /// [`ConfigError::InvalidResolution`] when the cell size is not a
    /// positive finite number.
    pub fn new(bounds: GridBounds, resolution_m: f64) -> Result<Self, ConfigError> {
        if !(bounds.lat_min < bounds.lat_max && bounds.lon_min < bounds.lon_max) {
            return Err(ConfigError::InvalidBounds {
                lat_min: bounds.lat_min,
                lat_max: bounds.lat_max,
                lon_min: bounds.lon_min,
                lon_max: bounds.lon_max,
            });
        }
        if !resolution_m.is_finite() || resolution_m <= 0.0 {
            return Err(ConfigError::InvalidResolution(resolution_m));
        }

        let mid_lat = (bounds.lat_min + bounds.lat_max) / 2.0;
        let lat_step = resolution_m / METERS_PER_DEGREE_LAT;
        let lon_step = resolution_m / (METERS_PER_DEGREE_LAT * mid_lat.to_radians().cos());

        let lats = axis(bounds.lat_min, bounds.lat_max, lat_step);
        let lons = axis(bounds.lon_min, bounds.lon_max, lon_step);

        Ok(GridSpec {
            bounds,
            resolution_m,
            lats,
            lons,
        })
    }

    /// Bounding box
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Cell size in meters
    #[must_use]
    pub const fn resolution_m(&self) -> f64 {
        self.resolution_m
    }

    /// Number of (rows, columns)
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.lats.len(), self.lons.len())
    }

    /// Latitude values of the rows, south to north
    #[must_use]
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Longitude values of the columns, west to east
    #[must_use]
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }
}

/// Inclusive-start axis sampling: always at least the two edges
fn axis(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut v = min;
    while v < max {
        values.push(v);
        v += step;
    }
    values.push(max);
    values
}

/// One evaluated concentration cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationCell {
    /// Cell center
    pub location: LatLon,
    /// Summed ground-level concentration over all sources (µg/m³)
    pub concentration: f64,
    /// Whether the cell exceeds the supplied 24-hour standard
    pub exceeds_standard: bool,
}

/// Evaluate the dispersion of every source over a mesh
///
/// Cells sum contributions from all sources. When a 24-hour standard is
/// supplied, exceeding cells are flagged for the compliance adapter. Rows
/// evaluate in parallel.
#[must_use]
pub fn concentration_grid(
    cfg: &DispersionConfig,
    sources: &[EmissionSource],
    spec: &GridSpec,
    met: &MeteorologicalState,
    pollutant: Pollutant,
    standard_24hr: Option<f64>,
) -> Vec<ConcentrationCell> {
    let cells: Vec<ConcentrationCell> = spec
        .lats()
        .par_iter()
        .flat_map_iter(|&lat| {
            spec.lons().iter().map(move |&lon| {
                let receptor = Receptor::grid_point(lat, lon);
                let total: f64 = sources
                    .iter()
                    .map(|s| concentration(cfg, s, &receptor, met, pollutant))
                    .sum();
                ConcentrationCell {
                    location: LatLon::new(lat, lon),
                    concentration: total,
                    exceeds_standard: standard_24hr.is_some_and(|limit| total > limit),
                }
            })
        })
        .collect();

    info!(
        pollutant = pollutant.as_str(),
        cells = cells.len(),
        exceeding = cells.iter().filter(|c| c.exceeds_standard).count(),
        "concentration grid evaluated"
    );
    cells
}

/// A-weighted noise levels over a mesh, row-major south to north
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseGrid {
    /// The mesh the values were evaluated on
    pub spec: GridSpec,
    /// LAeq per cell (dBA), row-major: `values[row * cols + col]`
    pub values: Vec<f64>,
}

impl NoiseGrid {
    fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.spec.lons().len() + col]
    }
}

/// Points approximating one iso-level contour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourLine {
    /// Contour level (dBA)
    pub level: f64,
    /// Cell centers whose cell the contour crosses
    pub points: Vec<LatLon>,
}

/// Evaluate combined noise of every source over a mesh
#[must_use]
pub fn noise_grid(
    cfg: &AcousticsConfig,
    sources: &[NoiseSource],
    spec: &GridSpec,
    terrain: GroundType,
    barriers: &[NoiseBarrier],
    met: &MeteorologicalState,
) -> NoiseGrid {
    let values: Vec<f64> = spec
        .lats()
        .par_iter()
        .flat_map_iter(|&lat| {
            spec.lons().iter().map(move |&lon| {
                let receptor = Receptor::grid_point(lat, lon);
                combined_noise_level(cfg, sources, &receptor, terrain, barriers, met).la_eq
            })
        })
        .collect();

    NoiseGrid {
        spec: spec.clone(),
        values,
    }
}

/// Extract iso-level contour points from an evaluated noise grid
///
/// Cell-crossing scan: a grid cell whose four corner values bracket the
/// level contributes its center point. Coarse but stable, and sufficient
/// for report-scale contour maps.
#[must_use]
pub fn noise_contours(grid: &NoiseGrid, levels: &[f64]) -> Vec<ContourLine> {
    let (rows, cols) = grid.spec.shape();
    let lats = grid.spec.lats();
    let lons = grid.spec.lons();

    levels
        .iter()
        .map(|&level| {
            let mut points = Vec::new();
            for row in 0..rows.saturating_sub(1) {
                for col in 0..cols.saturating_sub(1) {
                    let corners = [
                        grid.value(row, col),
                        grid.value(row + 1, col),
                        grid.value(row, col + 1),
                        grid.value(row + 1, col + 1),
                    ];
                    let min = corners.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    if min <= level && level <= max {
                        points.push(LatLon::new(
                            (lats[row] + lats[row + 1]) / 2.0,
                            (lons[col] + lons[col + 1]) / 2.0,
                        ));
                    }
                }
            }
            ContourLine { level, points }
        })
        .collect()
}

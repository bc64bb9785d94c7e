//! Gaussian plume concentration at a point
//!
//! Steady-state Gaussian plume with ground reflection, evaluated per
//! source/receptor/snapshot. The plume is modeled as influencing only a 90°
//! downwind sector (±45° of the wind direction) — a deliberate
//! simplification inherited from the original assessments, with a Gaussian
//! crosswind falloff inside the sector keyed to the angular deviation.
//!
//! # References
//! - Turner, D.B. (1994). "Workbook of Atmospheric Dispersion Estimates."
//!   2nd ed., CRC Press.

use crate::config::DispersionConfig;
use crate::core_types::met::MeteorologicalState;
use crate::core_types::receptor::Receptor;
use crate::core_types::results::ConcentrationResult;
use crate::core_types::source::{EmissionSource, Pollutant};
use crate::core_types::spatial::{angular_deviation_deg, MIN_DISTANCE_M};
use crate::dispersion::coefficients::dispersion_coefficients;
use crate::dispersion::plume_rise::effective_height;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Half-angle of the downwind sector of influence (degrees)
const SECTOR_HALF_ANGLE_DEG: f64 = 45.0;

/// Standard deviation of the crosswind angular falloff (degrees)
const CROSSWIND_SIGMA_DEG: f64 = 22.5;

/// Ground-level pollutant concentration at a receptor (µg/m³)
///
/// Returns 0 when the source does not emit the pollutant or when the
/// receptor lies outside the downwind sector — both are valid physical
/// results, not errors. Sub-floor wind speeds and sub-minimum distances are
/// clamped, never rejected.
#[must_use]
pub fn concentration(
    cfg: &DispersionConfig,
    source: &EmissionSource,
    receptor: &Receptor,
    met: &MeteorologicalState,
    pollutant: Pollutant,
) -> f64 {
    let q = source.emission_rate(pollutant);
    if q <= 0.0 {
        return 0.0;
    }

    let distance = source
        .location
        .distance_m(&receptor.location)
        .max(MIN_DISTANCE_M);
    let bearing = source.location.bearing_deg(&receptor.location);

    // Receptor outside the 90° downwind sector sees no plume
    let angle_diff = angular_deviation_deg(bearing, met.wind_direction);
    if angle_diff > SECTOR_HALF_ANGLE_DEG {
        return 0.0;
    }

    let u = met.wind_speed.max(cfg.min_wind_speed);
    let (sigma_y, sigma_z) = dispersion_coefficients(cfg, distance, met.stability);
    let h = effective_height(source, met, cfg.min_wind_speed);
    let z = receptor.height;

    // Centerline term plus ground-reflection image term
    let norm = q / (2.0 * PI * u * sigma_y * sigma_z);
    let direct = (-0.5 * ((z - h) / sigma_z).powi(2)).exp();
    let reflected = (-0.5 * ((z + h) / sigma_z).powi(2)).exp();
    let mut c = norm * (direct + reflected);

    // Crosswind falloff inside the sector
    c *= (-0.5 * (angle_diff / CROSSWIND_SIGMA_DEG).powi(2)).exp();

    // g/m³ -> µg/m³
    c *= 1e6;

    // Limited vertical mixing once the plume approaches the boundary-layer top
    if h > 0.8 * met.mixing_height {
        c *= (-(h - 0.8 * met.mixing_height) / met.mixing_height).exp();
    }

    c
}

/// Summed concentration of every source at every receptor
///
/// The receptor-table evaluation behind assessment reports; receptors are
/// rayon work items.
#[must_use]
pub fn receptor_concentrations(
    cfg: &DispersionConfig,
    sources: &[EmissionSource],
    receptors: &[Receptor],
    met: &MeteorologicalState,
    pollutant: Pollutant,
) -> Vec<ConcentrationResult> {
    receptors
        .par_iter()
        .map(|receptor| {
            let total: f64 = sources
                .iter()
                .map(|source| concentration(cfg, source, receptor, met, pollutant))
                .sum();
            ConcentrationResult {
                receptor_id: receptor.id.clone(),
                pollutant,
                concentration: total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::source::SourceKind;
    use crate::core_types::spatial::LatLon;
    use crate::core_types::ReceptorKind;

    fn pm10_source(rate_g_s: f64) -> EmissionSource {
        EmissionSource {
            id: "src".to_string(),
            kind: SourceKind::Point,
            location: LatLon::new(25.0, 55.0),
            height: 10.0,
            diameter: 0.5,
            exit_temperature: 400.0,
            exit_velocity: 10.0,
            emission_rates: [(Pollutant::Pm10, rate_g_s)].into_iter().collect(),
        }
    }

    /// Receptor a given distance north of the source (bearing 0°)
    fn receptor_north(distance_m: f64) -> Receptor {
        let dlat = distance_m / 111_195.0;
        Receptor {
            id: "r".to_string(),
            location: LatLon::new(25.0 + dlat, 55.0),
            height: 1.5,
            kind: ReceptorKind::Residential,
        }
    }

    fn northerly_flow() -> MeteorologicalState {
        // Wind blowing toward the north, receptor directly downwind
        MeteorologicalState::default()
    }

    #[test]
    fn test_zero_emission_rate_gives_zero() {
        let cfg = DispersionConfig::default();
        let source = pm10_source(10.0);
        let met = northerly_flow();
        let receptor = receptor_north(500.0);

        // Source emits PM10 only: any other pollutant reads zero
        let c = concentration(&cfg, &source, &receptor, &met, Pollutant::So2);
        assert_eq!(c, 0.0);
    }

    #[test]
    fn test_downwind_concentration_positive_and_decreasing() {
        let cfg = DispersionConfig::default();
        let source = pm10_source(10.0);
        let met = northerly_flow();

        let near = concentration(&cfg, &source, &receptor_north(500.0), &met, Pollutant::Pm10);
        let far = concentration(&cfg, &source, &receptor_north(1000.0), &met, Pollutant::Pm10);

        assert!(near.is_finite() && near > 0.0, "near concentration {near}");
        assert!(far.is_finite() && far > 0.0, "far concentration {far}");
        assert!(
            near > far,
            "concentration must fall with distance: {near} vs {far}"
        );
    }

    #[test]
    fn test_upwind_receptor_sees_nothing() {
        let cfg = DispersionConfig::default();
        let source = pm10_source(10.0);
        let met = MeteorologicalState {
            wind_direction: 180.0, // blowing south; receptor is north
            ..MeteorologicalState::default()
        };

        let c = concentration(&cfg, &source, &receptor_north(500.0), &met, Pollutant::Pm10);
        assert_eq!(c, 0.0);
    }

    #[test]
    fn test_centerline_is_maximum_over_bearings() {
        let cfg = DispersionConfig::default();
        let source = pm10_source(10.0);
        let met = northerly_flow();
        let distance = 500.0;

        let centerline =
            concentration(&cfg, &source, &receptor_north(distance), &met, Pollutant::Pm10);

        // Same distance, bearings swept off-axis
        for bearing_deg in [10.0_f64, 20.0, 30.0, 40.0] {
            let dlat = distance * bearing_deg.to_radians().cos() / 111_195.0;
            let dlon = distance * bearing_deg.to_radians().sin()
                / (111_195.0 * 25.0_f64.to_radians().cos());
            let receptor = Receptor {
                id: "r".to_string(),
                location: LatLon::new(25.0 + dlat, 55.0 + dlon),
                height: 1.5,
                kind: ReceptorKind::Residential,
            };
            let off_axis = concentration(&cfg, &source, &receptor, &met, Pollutant::Pm10);
            assert!(
                off_axis <= centerline,
                "off-axis ({bearing_deg}°) {off_axis} exceeds centerline {centerline}"
            );
        }
    }

    #[test]
    fn test_calm_wind_is_clamped_not_rejected() {
        let cfg = DispersionConfig::default();
        let source = pm10_source(10.0);
        let met = MeteorologicalState {
            wind_speed: 0.0,
            ..MeteorologicalState::default()
        };

        let c = concentration(&cfg, &source, &receptor_north(500.0), &met, Pollutant::Pm10);
        assert!(c.is_finite() && c > 0.0);
    }

    #[test]
    fn test_receptor_table_matches_single_evaluations() {
        let cfg = DispersionConfig::default();
        let sources = [pm10_source(10.0), pm10_source(5.0)];
        let met = northerly_flow();
        let receptors = [receptor_north(300.0), receptor_north(900.0)];

        let table = receptor_concentrations(&cfg, &sources, &receptors, &met, Pollutant::Pm10);
        assert_eq!(table.len(), 2);
        for (row, receptor) in table.iter().zip(&receptors) {
            assert_eq!(row.receptor_id, receptor.id);
            assert_eq!(row.pollutant, Pollutant::Pm10);
            let expected: f64 = sources
                .iter()
                .map(|s| concentration(&cfg, s, receptor, &met, Pollutant::Pm10))
                .sum();
            assert!((row.concentration - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mixing_height_rolloff_reduces_concentration() {
        let cfg = DispersionConfig::default();
        let source = pm10_source(10.0);

        let deep = MeteorologicalState {
            mixing_height: 2000.0,
            ..MeteorologicalState::default()
        };
        let shallow = MeteorologicalState {
            mixing_height: 10.0, // effective height far exceeds 0.8×zm
            ..MeteorologicalState::default()
        };

        let receptor = receptor_north(500.0);
        let c_deep = concentration(&cfg, &source, &receptor, &deep, Pollutant::Pm10);
        let c_shallow = concentration(&cfg, &source, &receptor, &shallow, Pollutant::Pm10);
        assert!(c_shallow < c_deep);
    }
}

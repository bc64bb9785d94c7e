//! Plume rise via Holland's formula
//!
//! A buoyant or high-velocity release climbs above its physical stack top
//! before leveling off. The effective height drives the vertical terms of
//! the Gaussian plume equation.
//!
//! # References
//! - Holland, J.Z. (1953). "A meteorological survey of the Oak Ridge area."
//!   USAEC Report ORO-99.

use crate::core_types::met::MeteorologicalState;
use crate::core_types::source::EmissionSource;

/// Gravitational acceleration (m/s²)
const GRAVITY: f64 = 9.81;

/// Plume rise is capped at this multiple of the physical stack height
const MAX_RISE_FACTOR: f64 = 3.0;

/// Effective release height: physical stack height plus plume rise (m)
///
/// Buoyancy flux `Fb = g·Vs·Ds²·(Ts − Ta)/(4·Ts)` decides the regime:
/// warmer-than-ambient plumes rise buoyantly
/// (`ΔH = 1.5·(Fb/u)^0.33·h^(2/3)`), cold or ambient-temperature releases
/// rise on exit momentum alone (`ΔH = 3·Ds·Vs/u`). Rise is capped at
/// 3 × the physical height.
#[must_use]
pub fn effective_height(
    source: &EmissionSource,
    met: &MeteorologicalState,
    min_wind_speed: f64,
) -> f64 {
    let u = met.wind_speed.max(min_wind_speed);

    let vs = source.exit_velocity;
    let ds = source.diameter;
    let ts = source.exit_temperature;
    let ta = met.temperature + 273.15;

    // Buoyancy flux (m⁴/s³)
    let fb = GRAVITY * vs * ds.powi(2) * (ts - ta) / (4.0 * ts);

    let rise = if fb > 0.0 {
        1.5 * (fb / u).powf(0.33) * source.height.powf(2.0 / 3.0)
    } else {
        3.0 * ds * vs / u
    };

    source.height + rise.min(MAX_RISE_FACTOR * source.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::source::SourceKind;
    use crate::core_types::spatial::LatLon;
    use rustc_hash::FxHashMap;

    fn stack(height: f64, exit_temperature: f64, exit_velocity: f64) -> EmissionSource {
        EmissionSource {
            id: "stack".to_string(),
            kind: SourceKind::Point,
            location: LatLon::new(25.0, 55.0),
            height,
            diameter: 1.0,
            exit_temperature,
            exit_velocity,
            emission_rates: FxHashMap::default(),
        }
    }

    #[test]
    fn test_hot_plume_rises_above_stack() {
        let met = MeteorologicalState::default();
        let h = effective_height(&stack(20.0, 450.0, 15.0), &met, 0.5);
        assert!(h > 20.0, "hot plume should rise, got {h}");
    }

    #[test]
    fn test_rise_capped_at_three_stack_heights() {
        let met = MeteorologicalState {
            wind_speed: 0.1, // floors to 0.5, maximizing rise
            ..MeteorologicalState::default()
        };
        let h = effective_height(&stack(10.0, 800.0, 30.0), &met, 0.5);
        assert!(h <= 10.0 + 3.0 * 10.0 + 1e-9);
    }

    #[test]
    fn test_cold_release_uses_momentum_rise() {
        let met = MeteorologicalState::default(); // 30 °C ambient = 303.15 K
        // Exit at ambient temperature: momentum regime, ΔH = 3·Ds·Vs/u
        let h = effective_height(&stack(20.0, 303.15, 10.0), &met, 0.5);
        let expected = 20.0 + 3.0 * 1.0 * 10.0 / 3.0;
        assert!((h - expected).abs() < 1e-6, "expected {expected}, got {h}");
    }

    #[test]
    fn test_stronger_wind_flattens_plume() {
        let calm = MeteorologicalState {
            wind_speed: 1.0,
            ..MeteorologicalState::default()
        };
        let windy = MeteorologicalState {
            wind_speed: 10.0,
            ..MeteorologicalState::default()
        };

        let source = stack(20.0, 450.0, 15.0);
        let h_calm = effective_height(&source, &calm, 0.5);
        let h_windy = effective_height(&source, &windy, 0.5);
        assert!(h_calm > h_windy);
    }
}

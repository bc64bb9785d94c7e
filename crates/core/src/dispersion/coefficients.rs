//! Pasquill–Gifford dispersion coefficients
//!
//! Power-law fits to the rural P-G curves give the horizontal (σy) and
//! vertical (σz) plume spread as a function of downwind distance and
//! stability class. σz is capped at 0.8 × the daytime mixing height: the
//! plume cannot spread vertically beyond the boundary layer.

use crate::config::DispersionConfig;
use crate::core_types::met::StabilityClass;

/// Horizontal and vertical dispersion coefficients (σy, σz) in meters
///
/// `σ = a · x_km^b · 1000` with (a, b) selected per stability class from the
/// configured table. Distance enters in kilometers, matching the fitted
/// curves.
#[must_use]
pub fn dispersion_coefficients(
    cfg: &DispersionConfig,
    distance_m: f64,
    stability: StabilityClass,
) -> (f64, f64) {
    let params = cfg.pg_params[stability.index()];
    let x_km = distance_m / 1000.0;

    let sigma_y = params.ay * x_km.powf(params.by) * 1000.0;
    let sigma_z = params.az * x_km.powf(params.bz) * 1000.0;

    // Vertical spread is bounded by the boundary layer
    let max_sigma_z = 0.8 * cfg.mixing_height_day;
    (sigma_y, sigma_z.min(max_sigma_z))
}

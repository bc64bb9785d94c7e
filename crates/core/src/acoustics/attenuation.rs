//! Outdoor propagation attenuation terms
//!
//! Per octave band the received level is
//! `Lp = Lw − Adiv − Aatm − Agr − Abar − Amisc`. Each term lives in its own
//! function so the engine and the tests can exercise them in isolation.
//!
//! # References
//! - ISO 9613-2:1996, "Attenuation of sound during propagation outdoors."
//! - Maekawa, Z. (1968). "Noise reduction by screens." Applied Acoustics 1.

use crate::acoustics::spectrum::OCTAVE_BANDS_HZ;
use crate::config::AcousticsConfig;
use crate::core_types::ground::GroundType;
use crate::core_types::source::{NoiseBarrier, NoiseSourceKind};
use crate::core_types::spatial::{segments_intersect, LatLon, MIN_DISTANCE_M};
use tracing::debug;

/// Near-field radius inside which an area source shows no divergence (m)
const AREA_NEAR_FIELD_M: f64 = 10.0;

/// Geometric divergence Adiv (dB), by source geometry
///
/// Point sources spread spherically (`20·log10(d) + 11`), line sources
/// cylindrically (`10·log10(d) + 8`). Area sources show no divergence inside
/// the near field, then `20·log10(d) − 10` beyond it.
#[must_use]
pub fn divergence(kind: NoiseSourceKind, distance_m: f64) -> f64 {
    let d = distance_m.max(MIN_DISTANCE_M);
    match kind {
        NoiseSourceKind::Point => 20.0 * d.log10() + 11.0,
        NoiseSourceKind::Line => 10.0 * d.log10() + 8.0,
        NoiseSourceKind::Area => {
            if d <= AREA_NEAR_FIELD_M {
                0.0
            } else {
                20.0 * d.log10() - 10.0
            }
        }
    }
}

/// Atmospheric absorption Aatm per band (dB)
///
/// Base coefficients hold at 20 °C / 70 % RH; temperature and humidity scale
/// them linearly. Scale factors are floored at zero so extreme inputs cannot
/// turn absorption into gain.
#[must_use]
pub fn atmospheric(
    cfg: &AcousticsConfig,
    distance_m: f64,
    temperature_c: f64,
    humidity_pct: f64,
) -> [f64; 8] {
    let temp_factor = (1.0 + 0.01 * (temperature_c - 20.0)).max(0.0);
    let humidity_factor = (1.0 - 0.01 * (humidity_pct - 70.0)).max(0.0);
    let km = distance_m / 1000.0;

    std::array::from_fn(|i| cfg.absorption_db_per_km[i] * temp_factor * humidity_factor * km)
}

/// Ground effect Agr per band (dB), floored at 0
///
/// Three-region model on the ground factor G and the mean of the source and
/// receiver heights. The middle region contributes only over acoustically
/// hard ground; source and receiver regions share the same expression.
#[must_use]
pub fn ground(
    cfg: &AcousticsConfig,
    ground: GroundType,
    distance_m: f64,
    source_height_m: f64,
    receiver_height_m: f64,
) -> [f64; 8] {
    let g = ground.ground_factor();
    let d = distance_m.max(MIN_DISTANCE_M);
    let hm = ((source_height_m + receiver_height_m) / 2.0).max(0.1);

    let region_extent = 30.0 * hm;
    let a_s = if d <= region_extent {
        -1.5 + g * 2.8 * (1.0 - d / region_extent)
    } else {
        -1.5
    };
    let a_m = -3.0 * (1.0 - g);
    let a_r = a_s;

    let total = a_s + a_m + a_r;
    std::array::from_fn(|i| (total * cfg.ground_frequency_weights[i]).max(0.0))
}

/// Barrier screening Abar per band (dB)
///
/// A barrier screens the path only when its plan-view segment crosses the
/// source-receiver segment and its crest stands above both endpoints. The
/// single most effective screening barrier applies; insertion loss is the
/// Maekawa estimate `10·log10(3 + 20·z)` with the configured assumed
/// path-length difference, limited by the barrier's transmission loss and
/// the configured hard cap. Low bands diffract around the crest, scaled by
/// `min(1, f/500)`.
#[must_use]
pub fn barrier(
    cfg: &AcousticsConfig,
    source_location: &LatLon,
    source_height_m: f64,
    receiver_location: &LatLon,
    receiver_height_m: f64,
    barriers: &[NoiseBarrier],
) -> [f64; 8] {
    let origin = source_location;
    let path_start = origin.local_offset_m(source_location);
    let path_end = origin.local_offset_m(receiver_location);
    let min_crest = source_height_m.max(receiver_height_m);

    let mut best = 0.0_f64;
    for b in barriers {
        if b.height <= min_crest {
            continue;
        }
        let b_start = origin.local_offset_m(&b.start);
        let b_end = origin.local_offset_m(&b.end);
        if !segments_intersect(&path_start, &path_end, &b_start, &b_end) {
            continue;
        }

        let maekawa = 10.0 * (3.0 + 20.0 * cfg.assumed_path_difference_m).log10();
        let insertion = maekawa
            .min(b.transmission_loss)
            .min(cfg.max_barrier_attenuation_db);
        if insertion > best {
            debug!(barrier = %b.id, insertion, "screening barrier on path");
            best = insertion;
        }
    }

    std::array::from_fn(|i| best * (OCTAVE_BANDS_HZ[i] / 500.0).min(1.0))
}

/// Miscellaneous corrections Amisc (dB), band-uniform
///
/// Scattered vegetation and building clutter accumulate with distance beyond
/// the onset range, capped. Downwind propagation above the wind threshold
/// applies the (negative) correction, raising received levels.
#[must_use]
pub fn miscellaneous(cfg: &AcousticsConfig, distance_m: f64, wind_speed_ms: f64) -> f64 {
    let mut a = 0.0;
    if distance_m > cfg.vegetation_onset_m {
        a += (distance_m / cfg.vegetation_onset_m).min(cfg.max_vegetation_attenuation_db);
    }
    if wind_speed_ms > cfg.downwind_threshold_ms {
        a += cfg.downwind_correction_db;
    }
    a
}

//! Single-path outdoor propagation
//!
//! Combines the attenuation terms into a per-band received level and the
//! A-weighted total at one receiver, plus the multi-source energy
//! combination both the grids and the construction assessment build on.

use crate::acoustics::attenuation::{atmospheric, barrier, divergence, ground, miscellaneous};
use crate::acoustics::spectrum::{a_weighted_total, band_spectrum, energy_sum};
use crate::config::AcousticsConfig;
use crate::core_types::ground::GroundType;
use crate::core_types::met::MeteorologicalState;
use crate::core_types::receptor::Receptor;
use crate::core_types::results::NoiseResult;
use crate::core_types::source::{NoiseBarrier, NoiseSource};
use crate::core_types::spatial::MIN_DISTANCE_M;

/// Received octave-band levels and A-weighted total from one source
///
/// Per band `Lp = Lw − Adiv − Aatm − Agr − Abar − Amisc` over the slant
/// (3-D) path, clamped to at least 1 m.
#[must_use]
pub fn noise_level(
    cfg: &AcousticsConfig,
    source: &NoiseSource,
    receptor: &Receptor,
    terrain: GroundType,
    barriers: &[NoiseBarrier],
    met: &MeteorologicalState,
) -> NoiseResult {
    let distance = source
        .location
        .slant_distance_m(source.height, &receptor.location, receptor.height)
        .max(MIN_DISTANCE_M);

    let lw = band_spectrum(source);
    let a_div = divergence(source.kind, distance);
    let a_atm = atmospheric(cfg, distance, met.temperature, met.humidity);
    let a_gr = ground(cfg, terrain, distance, source.height, receptor.height);
    let a_bar = barrier(
        cfg,
        &source.location,
        source.height,
        &receptor.location,
        receptor.height,
        barriers,
    );
    let a_misc = miscellaneous(cfg, distance, met.wind_speed);

    let band_levels: [f64; 8] =
        std::array::from_fn(|i| lw[i] - a_div - a_atm[i] - a_gr[i] - a_bar[i] - a_misc);
    let la_eq = a_weighted_total(cfg, &band_levels);

    NoiseResult { band_levels, la_eq }
}

/// Energy-combined result of every source heard at one receiver
#[must_use]
pub fn combined_noise_level(
    cfg: &AcousticsConfig,
    sources: &[NoiseSource],
    receptor: &Receptor,
    terrain: GroundType,
    barriers: &[NoiseBarrier],
    met: &MeteorologicalState,
) -> NoiseResult {
    let per_source: Vec<NoiseResult> = sources
        .iter()
        .map(|s| noise_level(cfg, s, receptor, terrain, barriers, met))
        .collect();

    let band_levels: [f64; 8] = std::array::from_fn(|i| {
        let levels: Vec<f64> = per_source.iter().map(|r| r.band_levels[i]).collect();
        energy_sum(&levels)
    });
    let la_eq = a_weighted_total(cfg, &band_levels);

    NoiseResult { band_levels, la_eq }
}

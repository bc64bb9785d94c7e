//! Octave-band spectra and level arithmetic
//!
//! Everything downstream works per octave band, 63 Hz to 8 kHz. Sources that
//! carry no measured spectrum get one synthesized from the overall sound
//! power level through a fixed shape template.

use crate::config::AcousticsConfig;
use crate::core_types::source::NoiseSource;

/// Octave-band center frequencies (Hz), 63 Hz to 8 kHz
pub const OCTAVE_BANDS_HZ: [f64; 8] = [63.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0];

/// Octave-band sound power spectrum for a source (dB per band)
///
/// A measured spectrum wins; otherwise the level is distributed via the
/// source's shape template as `Lw + offset` per band.
#[must_use]
pub fn band_spectrum(source: &NoiseSource) -> [f64; 8] {
    if let Some(spectrum) = source.spectrum {
        return spectrum;
    }
    let offsets = source.shape.band_offsets();
    std::array::from_fn(|i| source.sound_power_level + offsets[i])
}

/// Energy sum of decibel levels: `10·log10(Σ 10^(L/10))`
///
/// An empty input collapses to the silence floor, `-inf` dB, which then
/// behaves correctly under further energy summation.
#[must_use]
pub fn energy_sum(levels: &[f64]) -> f64 {
    let total: f64 = levels.iter().map(|l| 10f64.powf(l / 10.0)).sum();
    10.0 * total.log10()
}

/// A-weighted overall level from an octave-band spectrum (dBA)
#[must_use]
pub fn a_weighted_total(cfg: &AcousticsConfig, band_levels: &[f64; 8]) -> f64 {
    let weighted: Vec<f64> = band_levels
        .iter()
        .zip(cfg.a_weighting_db.iter())
        .map(|(l, w)| l + w)
        .collect();
    energy_sum(&weighted)
}

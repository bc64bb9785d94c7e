//! Statistical reduction over meteorological time series
//!
//! An hourly series is a sequence of independent snapshots, which makes
//! every per-record evaluation an independent unit of work — the reductions
//! here run them through rayon. Series longer than one nominal year
//! (8 760 records) are stride-sampled down first; that is a configurable
//! performance/accuracy trade-off, not a correctness requirement.

use crate::config::DispersionConfig;
use crate::core_types::met::{MetRecord, HOURS_PER_YEAR};
use crate::core_types::receptor::Receptor;
use crate::core_types::source::{EmissionSource, Pollutant};
use crate::dispersion::plume::concentration;
use crate::error::ConfigError;
use rayon::prelude::*;
use tracing::debug;

/// Percentiles reported by default: median plus the upper tail the
/// short-term standards care about
pub const DEFAULT_PERCENTILES: [f64; 5] = [50.0, 90.0, 95.0, 98.0, 99.0];

/// Mean concentration over an hourly series (µg/m³)
///
/// # Errors
/// Returns [`ConfigError::EmptySeries`] when the series holds no records.
pub fn annual_average(
    cfg: &DispersionConfig,
    source: &EmissionSource,
    receptor: &Receptor,
    series: &[MetRecord],
    pollutant: Pollutant,
) -> Result<f64, ConfigError> {
    let values = evaluate_series(cfg, source, receptor, series, pollutant)?;
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Concentration percentiles over an hourly series
///
/// Returns `(percentile, µg/m³)` pairs in the order requested, using linear
/// interpolation between order statistics.
///
/// # Errors
/// Returns [`ConfigError::EmptySeries`] when the series holds no records.
pub fn percentiles(
    cfg: &DispersionConfig,
    source: &EmissionSource,
    receptor: &Receptor,
    series: &[MetRecord],
    pollutant: Pollutant,
    requested: &[f64],
) -> Result<Vec<(f64, f64)>, ConfigError> {
    let mut values = evaluate_series(cfg, source, receptor, series, pollutant)?;
    values.sort_by(f64::total_cmp);

    Ok(requested
        .iter()
        .map(|&p| (p, percentile_of_sorted(&values, p)))
        .collect())
}

/// Evaluate the plume model for every (possibly down-sampled) record
fn evaluate_series(
    cfg: &DispersionConfig,
    source: &EmissionSource,
    receptor: &Receptor,
    series: &[MetRecord],
    pollutant: Pollutant,
) -> Result<Vec<f64>, ConfigError> {
    if series.is_empty() {
        return Err(ConfigError::EmptySeries);
    }

    let stride = if series.len() > HOURS_PER_YEAR {
        let stride = series.len() / HOURS_PER_YEAR;
        debug!(
            records = series.len(),
            stride, "down-sampling long meteorological series"
        );
        stride.max(1)
    } else {
        1
    };

    Ok(series
        .par_iter()
        .step_by(stride)
        .map(|record| concentration(cfg, source, receptor, &record.to_state(), pollutant))
        .collect())
}

/// Linear-interpolation percentile of an ascending-sorted slice
fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

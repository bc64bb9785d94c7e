//! Gaussian plume air dispersion engine
//!
//! Predicts ground-level pollutant concentrations from point, area, and
//! volume emission sources under hourly meteorological snapshots, plus
//! statistical reductions over annual series.

pub mod coefficients;
pub mod plume;
pub mod plume_rise;
pub mod statistics;

pub use coefficients::dispersion_coefficients;
pub use plume::{concentration, receptor_concentrations};
pub use plume_rise::effective_height;
pub use statistics::{annual_average, percentiles, DEFAULT_PERCENTILES};

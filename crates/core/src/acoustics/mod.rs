//! Outdoor noise propagation engine
//!
//! Octave-band propagation in the manner of ISO 9613-2, construction-phase
//! assessment against jurisdiction limits, and mitigation recommendation.

pub mod attenuation;
pub mod construction;
pub mod propagation;
pub mod spectrum;

pub use construction::{
    predict_construction_noise, recommend_mitigation_measures, BudgetTier, CostLevel,
    MitigationMeasure, NoisePrediction, SensitiveReceiver,
};
pub use propagation::{combined_noise_level, noise_level};
pub use spectrum::{a_weighted_total, band_spectrum, energy_sum, OCTAVE_BANDS_HZ};

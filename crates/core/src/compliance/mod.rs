//! Regulatory compliance assessment
//!
//! Turns engine outputs into findings against injected standards tables. No
//! physics happens here: a zero maximum is a valid computed result and
//! assesses as compliant, while a failure to compute never reaches this
//! module (the grid and adapter boundaries surface `ConfigError` first).

use crate::acoustics::construction::{
    recommend_mitigation_measures, BudgetTier, MitigationMeasure, NoisePrediction,
};
use crate::config::{AirQualityStandards, AveragingPeriod};
use crate::core_types::results::PollutantImpact;
use crate::core_types::source::{Pollutant, WorkPeriod};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One pollutant/period row of the air-quality assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirFinding {
    /// Pollutant assessed
    pub pollutant: Pollutant,
    /// Averaging period of the standard
    pub period: AveragingPeriod,
    /// Applicable standard (µg/m³)
    pub standard: f64,
    /// Maximum predicted concentration (µg/m³)
    pub maximum: f64,
    /// Maximum as a percentage of the standard
    pub percentage_of_standard: f64,
    /// Whether the maximum meets the standard
    pub compliant: bool,
    /// Percentage points over the standard; 0 when compliant
    pub exceedance_pct: f64,
    /// Percentage points of headroom below the standard; 0 when exceeding
    pub margin_pct: f64,
}

/// Air-quality assessment over all modeled pollutants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirAssessment {
    /// Per pollutant/period findings
    pub findings: Vec<AirFinding>,
    /// Whether every finding is compliant
    pub compliant: bool,
    /// Mitigation recommendations; empty when fully compliant
    pub recommendations: Vec<String>,
}

/// Fixed dust-mitigation recommendations issued on any air exceedance
const DUST_MITIGATION: [&str; 6] = [
    "Implement dust suppression measures (water spraying, chemical suppressants)",
    "Limit equipment operating hours during high-wind conditions",
    "Use Tier 4 or electric equipment where possible",
    "Install particulate filters on diesel equipment",
    "Establish buffer zones around sensitive receptors",
    "Implement real-time air quality monitoring",
];

/// Assess per-pollutant maxima against an air-quality standards table
///
/// Each impact is checked against every averaging period the table defines
/// for its pollutant. Pollutants without table entries produce no findings.
#[must_use]
pub fn assess_air_quality(
    impacts: &[PollutantImpact],
    standards: &AirQualityStandards,
) -> AirAssessment {
    let mut findings = Vec::new();

    for impact in impacts {
        for &(period, standard) in standards.limits_for(impact.pollutant) {
            let percentage = impact.maximum / standard * 100.0;
            findings.push(AirFinding {
                pollutant: impact.pollutant,
                period,
                standard,
                maximum: impact.maximum,
                percentage_of_standard: percentage,
                compliant: percentage <= 100.0,
                exceedance_pct: (percentage - 100.0).max(0.0),
                margin_pct: (100.0 - percentage).max(0.0),
            });
        }
    }

    let compliant = findings.iter().all(|f| f.compliant);
    let recommendations = if compliant {
        Vec::new()
    } else {
        DUST_MITIGATION.iter().map(|&s| s.to_string()).collect()
    };

    info!(
        findings = findings.len(),
        compliant, "air quality assessment complete"
    );
    AirAssessment {
        findings,
        compliant,
        recommendations,
    }
}

/// Noise assessment summary over all receivers and periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseAssessment {
    /// Number of distinct receivers assessed
    pub total_receivers: usize,
    /// Receivers compliant in every period
    pub compliant_receivers: usize,
    /// Receivers exceeding in at least one period
    pub non_compliant_receivers: usize,
    /// Worst exceedance over all predictions (dB)
    pub max_exceedance_db: f64,
    /// Periods with at least one exceedance, in diurnal order
    pub affected_periods: Vec<WorkPeriod>,
    /// Whether any mitigation is needed
    pub mitigation_required: bool,
    /// Narrative conclusions for the report
    pub conclusions: Vec<String>,
    /// Recommended measures, via the acoustics rule lookup
    pub recommendations: Vec<MitigationMeasure>,
}

/// Summarize construction-noise predictions into a reportable assessment
#[must_use]
pub fn assess_noise(predictions: &[NoisePrediction], budget: BudgetTier) -> NoiseAssessment {
    let mut receiver_ids: Vec<&str> = predictions.iter().map(|p| p.receiver_id.as_str()).collect();
    receiver_ids.sort_unstable();
    receiver_ids.dedup();
    let total_receivers = receiver_ids.len();

    let non_compliant_receivers = receiver_ids
        .iter()
        .filter(|id| {
            predictions
                .iter()
                .any(|p| p.receiver_id == **id && !p.compliant)
        })
        .count();
    let compliant_receivers = total_receivers - non_compliant_receivers;

    let max_exceedance_db = predictions
        .iter()
        .map(|p| p.exceedance_db)
        .fold(0.0_f64, f64::max);

    let affected_periods: Vec<WorkPeriod> = WorkPeriod::ALL
        .into_iter()
        .filter(|period| {
            predictions
                .iter()
                .any(|p| p.period == *period && !p.compliant)
        })
        .collect();

    let mitigation_required = max_exceedance_db > 0.0;

    let mut conclusions = Vec::new();
    if non_compliant_receivers == 0 {
        conclusions.push("All sensitive receivers comply with applicable noise limits".to_string());
    } else {
        conclusions.push(format!(
            "{non_compliant_receivers} receivers exceed noise limits by up to \
             {max_exceedance_db:.1} dB"
        ));
        if affected_periods.contains(&WorkPeriod::Night) {
            conclusions.push(
                "Night-time noise limits are exceeded, requiring restrictions on night work"
                    .to_string(),
            );
        }
    }

    let recommendations = recommend_mitigation_measures(predictions, budget);

    info!(
        total_receivers,
        non_compliant_receivers, max_exceedance_db, "noise assessment complete"
    );
    NoiseAssessment {
        total_receivers,
        compliant_receivers,
        non_compliant_receivers,
        max_exceedance_db,
        affected_periods,
        mitigation_required,
        conclusions,
        recommendations,
    }
}

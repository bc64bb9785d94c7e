//! Construction-phase noise assessment
//!
//! Predicts the working-period LAeq at each sensitive receiver from the
//! active plant, compares against the jurisdiction limits, and turns any
//! exceedance into a ranked list of mitigation measures.

use crate::acoustics::propagation::combined_noise_level;
use crate::config::{AcousticsConfig, Jurisdiction, NoiseLimits, ZoneKind};
use crate::core_types::ground::GroundType;
use crate::core_types::met::MeteorologicalState;
use crate::core_types::receptor::{Receptor, ReceptorKind};
use crate::core_types::source::{NoiseBarrier, NoiseSource, WorkPeriod};
use crate::core_types::spatial::LatLon;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A noise-sensitive receiver with its zoning for limit lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitiveReceiver {
    /// Receiver identifier for reporting
    pub id: String,
    /// Receiver location
    pub location: LatLon,
    /// Assessment height above ground (m)
    pub height: f64,
    /// Land-use zone deciding the applicable limit
    pub zone: ZoneKind,
}

/// Predicted level at one receiver during one working period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoisePrediction {
    /// Receiver the prediction applies to
    pub receiver_id: String,
    /// Working period assessed
    pub period: WorkPeriod,
    /// Predicted A-weighted level (dBA)
    pub predicted_la_eq: f64,
    /// Applicable ambient limit (dBA)
    pub limit_db: f64,
    /// Amount over the limit (dB); 0 when compliant
    pub exceedance_db: f64,
    /// Whether the predicted level meets the limit
    pub compliant: bool,
}

/// Indicative cost class of a mitigation measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CostLevel {
    /// Procedural or operational change
    Low,
    /// Equipment treatment or local screening
    Medium,
    /// Structural works or plant substitution
    High,
}

/// Mitigation budget available to the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    /// Operational measures only
    Low,
    /// Operational plus equipment-level measures
    Medium,
    /// All measures including structural works
    High,
}

impl BudgetTier {
    const fn admits(self, cost: CostLevel) -> bool {
        match self {
            BudgetTier::Low => matches!(cost, CostLevel::Low),
            BudgetTier::Medium => matches!(cost, CostLevel::Low | CostLevel::Medium),
            BudgetTier::High => true,
        }
    }
}

/// A recommended mitigation measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationMeasure {
    /// What to do
    pub description: String,
    /// Indicative level reduction (dB)
    pub expected_reduction_db: f64,
    /// Indicative cost class
    pub cost: CostLevel,
}

impl MitigationMeasure {
    fn new(description: &str, expected_reduction_db: f64, cost: CostLevel) -> Self {
        MitigationMeasure {
            description: description.to_string(),
            expected_reduction_db,
            cost,
        }
    }
}

/// Predict working-period levels at every receiver and flag exceedances
///
/// A source contributes to a period only when its operating hours cover that
/// period; plant without registered night hours never enters the night
/// assessment. Limits come from the injected table per jurisdiction, zone,
/// and period.
#[must_use]
pub fn predict_construction_noise(
    cfg: &AcousticsConfig,
    limits: &NoiseLimits,
    jurisdiction: Jurisdiction,
    sources: &[NoiseSource],
    receivers: &[SensitiveReceiver],
    terrain: GroundType,
    barriers: &[NoiseBarrier],
    met: &MeteorologicalState,
) -> Vec<NoisePrediction> {
    let mut predictions = Vec::with_capacity(receivers.len() * WorkPeriod::ALL.len());

    for receiver in receivers {
        let receptor = Receptor {
            id: receiver.id.clone(),
            location: receiver.location,
            height: receiver.height,
            kind: ReceptorKind::Other,
        };

        for period in WorkPeriod::ALL {
            let active: Vec<NoiseSource> = sources
                .iter()
                .filter(|s| s.operating_hours.contains_key(&period))
                .cloned()
                .collect();
            if active.is_empty() {
                continue;
            }

            let result = combined_noise_level(cfg, &active, &receptor, terrain, barriers, met);
            let limit = limits.limit(jurisdiction, receiver.zone, period);
            let exceedance = (result.la_eq - limit).max(0.0);

            predictions.push(NoisePrediction {
                receiver_id: receiver.id.clone(),
                period,
                predicted_la_eq: result.la_eq,
                limit_db: limit,
                exceedance_db: exceedance,
                compliant: exceedance == 0.0,
            });
        }
    }

    let exceeding = predictions.iter().filter(|p| !p.compliant).count();
    info!(
        receivers = receivers.len(),
        predictions = predictions.len(),
        exceeding,
        "construction noise assessment complete"
    );
    predictions
}

/// Mitigation measures ranked by expected reduction, filtered by budget
///
/// The rule set keys on the worst exceedance across all predictions:
/// moderate exceedances (≤ 5 dB) draw operational controls, larger ones
/// (≤ 10 dB) add equipment treatment and local screening, and anything
/// beyond that brings in structural measures. A monitoring measure closes
/// every non-empty list; a fully compliant prediction set yields a single
/// "no mitigation required" entry.
#[must_use]
pub fn recommend_mitigation_measures(
    predictions: &[NoisePrediction],
    budget: BudgetTier,
) -> Vec<MitigationMeasure> {
    let worst = predictions
        .iter()
        .map(|p| p.exceedance_db)
        .fold(0.0_f64, f64::max);

    if worst <= 0.0 {
        return vec![MitigationMeasure::new(
            "No mitigation required; predicted levels comply at all receivers",
            0.0,
            CostLevel::Low,
        )];
    }

    let mut measures = vec![
        MitigationMeasure::new(
            "Restrict noisy activities to daytime working hours",
            5.0,
            CostLevel::Low,
        ),
        MitigationMeasure::new(
            "Maintain plant in good order and switch off idle equipment",
            2.0,
            CostLevel::Low,
        ),
    ];

    if worst > 5.0 {
        measures.push(MitigationMeasure::new(
            "Fit residential-grade silencers and acoustic covers to fixed plant",
            5.0,
            CostLevel::Medium,
        ));
        measures.push(MitigationMeasure::new(
            "Erect temporary hoarding or acoustic screens around the work area",
            10.0,
            CostLevel::Medium,
        ));
    }
    if worst > 10.0 {
        measures.push(MitigationMeasure::new(
            "Enclose stationary plant in acoustic enclosures",
            15.0,
            CostLevel::High,
        ));
        measures.push(MitigationMeasure::new(
            "Substitute quieter methods, e.g. pressed piling over impact driving",
            20.0,
            CostLevel::High,
        ));
    }

    measures.retain(|m| budget.admits(m.cost));
    measures.sort_by(|a, b| b.expected_reduction_db.total_cmp(&a.expected_reduction_db));
    measures.push(MitigationMeasure::new(
        "Undertake attended noise monitoring at the worst-affected receivers",
        0.0,
        CostLevel::Low,
    ));
    measures
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn day_source(lw: f64, distance_north_m: f64) -> NoiseSource {
        let mut hours = FxHashMap::default();
        hours.insert(WorkPeriod::Day, (7, 19));
        NoiseSource {
            operating_hours: hours,
            ..NoiseSource::point(
                "plant",
                LatLon::new(25.0 + distance_north_m / 111_195.0, 55.0),
                2.0,
                lw,
            )
        }
    }

    fn receiver() -> SensitiveReceiver {
        SensitiveReceiver {
            id: "villa_1".to_string(),
            location: LatLon::new(25.0, 55.0),
            height: 1.5,
            zone: ZoneKind::Residential,
        }
    }

    #[test]
    fn test_night_skipped_without_night_sources() {
        let cfg = AcousticsConfig::default();
        let limits = NoiseLimits::default();
        let predictions = predict_construction_noise(
            &cfg,
            &limits,
            Jurisdiction::Uae,
            &[day_source(110.0, 50.0)],
            &[receiver()],
            GroundType::Sand,
            &[],
            &MeteorologicalState::default(),
        );

        assert!(predictions.iter().all(|p| p.period == WorkPeriod::Day));
    }

    #[test]
    fn test_loud_close_plant_exceeds_residential_limit() {
        let cfg = AcousticsConfig::default();
        let limits = NoiseLimits::default();
        let predictions = predict_construction_noise(
            &cfg,
            &limits,
            Jurisdiction::Uae,
            &[day_source(115.0, 30.0)],
            &[receiver()],
            GroundType::Sand,
            &[],
            &MeteorologicalState::default(),
        );

        let day = &predictions[0];
        assert!(!day.compliant);
        assert!(day.exceedance_db > 0.0);
        assert_eq!(day.limit_db, 55.0);
    }

    #[test]
    fn test_distant_plant_complies() {
        let cfg = AcousticsConfig::default();
        let limits = NoiseLimits::default();
        let predictions = predict_construction_noise(
            &cfg,
            &limits,
            Jurisdiction::Uae,
            &[day_source(95.0, 2000.0)],
            &[receiver()],
            GroundType::Sand,
            &[],
            &MeteorologicalState::default(),
        );

        assert!(predictions[0].compliant);
        assert_eq!(predictions[0].exceedance_db, 0.0);
    }

    fn prediction_with_exceedance(exceedance: f64) -> NoisePrediction {
        NoisePrediction {
            receiver_id: "r".to_string(),
            period: WorkPeriod::Day,
            predicted_la_eq: 55.0 + exceedance,
            limit_db: 55.0,
            exceedance_db: exceedance,
            compliant: exceedance == 0.0,
        }
    }

    #[test]
    fn test_compliant_set_needs_no_mitigation() {
        let measures =
            recommend_mitigation_measures(&[prediction_with_exceedance(0.0)], BudgetTier::High);
        assert_eq!(measures.len(), 1);
        assert!(measures[0].description.contains("No mitigation required"));
    }

    #[test]
    fn test_large_exceedance_brings_structural_measures() {
        let measures =
            recommend_mitigation_measures(&[prediction_with_exceedance(12.0)], BudgetTier::High);
        assert!(measures.iter().any(|m| m.cost == CostLevel::High));
        // Ranked by expected reduction
        for window in measures.windows(2) {
            assert!(window[0].expected_reduction_db >= window[1].expected_reduction_db
                || window[1].expected_reduction_db == 0.0);
        }
    }

    #[test]
    fn test_low_budget_filters_out_expensive_measures() {
        let measures =
            recommend_mitigation_measures(&[prediction_with_exceedance(12.0)], BudgetTier::Low);
        assert!(!measures.is_empty());
        assert!(measures.iter().all(|m| m.cost == CostLevel::Low));
    }

    #[test]
    fn test_monitoring_measure_always_closes_the_list() {
        let measures =
            recommend_mitigation_measures(&[prediction_with_exceedance(3.0)], BudgetTier::Medium);
        assert!(measures.last().unwrap().description.contains("monitoring"));
    }
}

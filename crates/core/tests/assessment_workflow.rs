//! End-to-End Assessment Workflow
//!
//! Drives the full chain the surrounding platform uses: project description
//! through both adapters, engines, and the compliance summaries, checking
//! that the pieces agree with each other.
//!
//! Run with: cargo test --test `assessment_workflow`

use impact_model_core::acoustics::SensitiveReceiver;
use impact_model_core::core_types::{
    EquipmentItem, EquipmentKind, PollutantImpact, ProjectDescription,
};
use impact_model_core::{
    assess_air_quality, assess_noise, concentration_grid, emission_sources_from_project,
    noise_sources_from_project, predict_construction_noise, AirQualityStandards, AcousticsConfig,
    BudgetTier, DispersionConfig, EquipmentDataset, GridBounds, GridSpec, GroundType,
    Jurisdiction, LatLon, MeteorologicalState, NoiseLimits, Pollutant, WorkPeriod, ZoneKind,
};

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// A small construction project with a noisy night-working fleet near a
/// residential receiver
fn demo_project() -> ProjectDescription {
    ProjectDescription {
        center: Some(LatLon::new(25.01, 55.01)),
        equipment: vec![
            EquipmentItem {
                id: "pd_1".to_string(),
                kind: EquipmentKind::PileDriver,
                location: None,
                height: 3.0,
                quantity: 1,
                usage_factor: 0.6,
                hours_per_day: 10.0,
                night_work: false,
            },
            EquipmentItem {
                id: "gen_1".to_string(),
                kind: EquipmentKind::Generator,
                location: None,
                height: 1.5,
                quantity: 2,
                usage_factor: 1.0,
                hours_per_day: 24.0,
                night_work: true,
            },
        ],
        construction_area_m2: Some(20_000.0),
        ..ProjectDescription::default()
    }
}

/// Air side: adapt, grid, reduce to maxima, assess
#[test]
fn test_air_workflow_produces_consistent_findings() {
    init_logging();
    let project = demo_project();
    let dataset = EquipmentDataset::default();
    let sources = emission_sources_from_project(&project, &dataset).unwrap();
    // Two exhausts plus the dust area source
    assert_eq!(sources.len(), 3);

    let spec = GridSpec::new(
        GridBounds {
            lat_min: 25.0,
            lat_max: 25.02,
            lon_min: 55.0,
            lon_max: 55.02,
        },
        400.0,
    )
    .unwrap();
    let met = MeteorologicalState::default();

    let standards = AirQualityStandards::default();
    let mut impacts = Vec::new();
    for pollutant in [Pollutant::Pm10, Pollutant::Pm25] {
        let cells = concentration_grid(
            &DispersionConfig::default(),
            &sources,
            &spec,
            &met,
            pollutant,
            None,
        );
        let peak = cells
            .iter()
            .max_by(|a, b| a.concentration.total_cmp(&b.concentration))
            .unwrap();
        impacts.push(PollutantImpact {
            pollutant,
            maximum: peak.concentration,
            location: Some(peak.location),
        });
    }

    let assessment = assess_air_quality(&impacts, &standards);
    // PM10 and PM2.5 each carry 24-hour and annual standards
    assert_eq!(assessment.findings.len(), 4);
    for finding in &assessment.findings {
        assert!(finding.maximum >= 0.0);
        assert_eq!(
            finding.compliant,
            finding.percentage_of_standard <= 100.0
        );
        // Exactly one of margin and exceedance is non-zero (or both zero
        // at the boundary)
        assert!(finding.margin_pct == 0.0 || finding.exceedance_pct == 0.0);
    }
    // A small fleet over a 2 km domain stays within standards
    assert!(assessment.compliant);
    assert!(assessment.recommendations.is_empty());
}

/// Noise side: adapt, predict per period, assess; night work by the
/// generators must drive a night finding
#[test]
fn test_noise_workflow_flags_night_work() {
    init_logging();
    let project = demo_project();
    let dataset = EquipmentDataset::default();
    let sources = noise_sources_from_project(&project, &dataset).unwrap();
    assert_eq!(sources.len(), 2);

    // Generators run at night, the pile driver does not
    let night_active: Vec<_> = sources
        .iter()
        .filter(|s| s.operating_hours.contains_key(&WorkPeriod::Night))
        .collect();
    assert_eq!(night_active.len(), 1);
    assert_eq!(night_active[0].id, "gen_1");

    let receivers = [SensitiveReceiver {
        id: "villa_row".to_string(),
        location: LatLon::new(25.0115, 55.0105), // ~180 m from site center
        height: 1.5,
        zone: ZoneKind::Residential,
    }];

    let predictions = predict_construction_noise(
        &AcousticsConfig::default(),
        &NoiseLimits::default(),
        Jurisdiction::Uae,
        &sources,
        &receivers,
        GroundType::Sand,
        &[],
        &MeteorologicalState::default(),
    );

    // Day, evening, and night rows for the one receiver
    assert_eq!(predictions.len(), 3);
    let night = predictions
        .iter()
        .find(|p| p.period == WorkPeriod::Night)
        .unwrap();
    let day = predictions
        .iter()
        .find(|p| p.period == WorkPeriod::Day)
        .unwrap();
    // Daytime carries the pile driver on top of the generators
    assert!(day.predicted_la_eq > night.predicted_la_eq);
    // Night limit is the strictest
    assert!(night.limit_db < day.limit_db);

    let assessment = assess_noise(&predictions, BudgetTier::Medium);
    assert_eq!(assessment.total_receivers, 1);
    assert_eq!(
        assessment.mitigation_required,
        assessment.max_exceedance_db > 0.0
    );
    if assessment
        .affected_periods
        .contains(&WorkPeriod::Night)
    {
        assert!(assessment
            .conclusions
            .iter()
            .any(|c| c.contains("night work")));
    }
    assert!(!assessment.recommendations.is_empty());
}

/// The compliance layer treats a computed zero as a valid, compliant result
#[test]
fn test_zero_impact_assesses_compliant() {
    let standards = AirQualityStandards::default();
    let impacts = [PollutantImpact {
        pollutant: Pollutant::So2,
        maximum: 0.0,
        location: None,
    }];
    let assessment = assess_air_quality(&impacts, &standards);
    assert!(assessment.compliant);
    assert!(assessment.findings.iter().all(|f| f.margin_pct == 100.0));
}

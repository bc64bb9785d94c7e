//! Acoustic Engine Validation Suite
//!
//! Validates the octave-band propagation model against its analytical
//! properties: energy summation, divergence laws, ground and barrier bounds,
//! and the adapter's level arithmetic.
//!
//! Run with: cargo test --test `noise_validation`

use impact_model_core::acoustics::attenuation;
use impact_model_core::core_types::{EquipmentItem, EquipmentKind, ProjectDescription};
use impact_model_core::{
    combined_noise_level, noise_contours, noise_grid, noise_level, noise_sources_from_project,
    AcousticsConfig, EquipmentDataset, GridBounds, GridSpec, GroundType, LatLon,
    MeteorologicalState, NoiseBarrier, NoiseSource, Receptor, ReceptorKind,
};
use impact_model_core::acoustics::energy_sum;

fn receiver_north(distance_m: f64) -> Receptor {
    Receptor {
        id: "r".to_string(),
        location: LatLon::new(25.0 + distance_m / 111_195.0, 55.0),
        height: 1.5,
        kind: ReceptorKind::Residential,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Level arithmetic
// ═══════════════════════════════════════════════════════════════════════════

/// Two 90 dB sources combine to ~93 dB, N identical sources to
/// `Lw + 10·log10(N)`
#[test]
fn test_energy_summation_of_identical_levels() {
    let two = energy_sum(&[90.0, 90.0]);
    assert!((two - 93.01).abs() < 0.01, "two sources: {two}");

    for n in [3usize, 5, 10] {
        let levels = vec![90.0; n];
        let combined = energy_sum(&levels);
        let expected = 90.0 + 10.0 * (n as f64).log10();
        assert!(
            (combined - expected).abs() < 1e-9,
            "{n} sources: {combined} vs {expected}"
        );
    }
}

/// The 105 dB point-source scenario: a plausible received level at 100 m,
/// and a second identical unit adds close to 3 dB
#[test]
fn test_105_db_scenario_with_unit_doubling() {
    let cfg = AcousticsConfig::default();
    let met = MeteorologicalState::default();
    let receiver = receiver_north(100.0);
    let unit = NoiseSource::point("gen_1", LatLon::new(25.0, 55.0), 2.0, 105.0);

    let one = combined_noise_level(
        &cfg,
        std::slice::from_ref(&unit),
        &receiver,
        GroundType::Sand,
        &[],
        &met,
    );
    assert!(
        one.la_eq > 45.0 && one.la_eq < 65.0,
        "single unit at 100 m: {}",
        one.la_eq
    );

    let two = combined_noise_level(
        &cfg,
        &[unit.clone(), unit],
        &receiver,
        GroundType::Sand,
        &[],
        &met,
    );
    let gain = two.la_eq - one.la_eq;
    assert!((gain - 3.01).abs() < 0.05, "doubling gain {gain}");
}

// ═══════════════════════════════════════════════════════════════════════════
// Attenuation bounds
// ═══════════════════════════════════════════════════════════════════════════

/// Ground attenuation never becomes a gain, whatever the ground type,
/// distance, or geometry
#[test]
fn test_ground_attenuation_non_negative_everywhere() {
    let cfg = AcousticsConfig::default();
    for ground in [
        GroundType::Hard,
        GroundType::Porous,
        GroundType::Mixed,
        GroundType::Sand,
        GroundType::VerySoft,
    ] {
        for distance in [1.0, 15.0, 120.0, 900.0, 4000.0] {
            for height in [0.5, 1.5, 4.0, 10.0] {
                let a = attenuation::ground(&cfg, ground, distance, height, 1.5);
                for (band, value) in a.iter().enumerate() {
                    assert!(
                        *value >= 0.0,
                        "{ground:?} d={distance} h={height} band {band}: {value}"
                    );
                }
            }
        }
    }
}

/// Barrier insertion loss never exceeds the 20 dB cap in any band
#[test]
fn test_barrier_attenuation_capped_at_20_db() {
    let cfg = AcousticsConfig::default();
    let source = LatLon::new(25.0, 55.0);
    let receiver = LatLon::new(25.002, 55.0);
    let massive_wall = NoiseBarrier {
        id: "wall".to_string(),
        start: LatLon::new(25.001, 54.99),
        end: LatLon::new(25.001, 55.01),
        height: 30.0,
        transmission_loss: 60.0,
    };

    let a = attenuation::barrier(&cfg, &source, 2.0, &receiver, 1.5, &[massive_wall]);
    for value in a {
        assert!(value <= 20.0);
        assert!(value >= 0.0);
    }
    // The high bands reach the cap exactly
    assert!((a[7] - 20.0).abs() < 1e-9);
}

/// Of two screening barriers the more effective one governs; they do not
/// stack
#[test]
fn test_single_best_barrier_governs() {
    let cfg = AcousticsConfig::default();
    let met = MeteorologicalState::default();
    let receiver = receiver_north(300.0);
    let source = NoiseSource::point("s", LatLon::new(25.0, 55.0), 2.0, 110.0);

    let strong = NoiseBarrier {
        id: "strong".to_string(),
        start: LatLon::new(25.001, 54.99),
        end: LatLon::new(25.001, 55.01),
        height: 8.0,
        transmission_loss: 40.0,
    };
    let weak = NoiseBarrier {
        id: "weak".to_string(),
        start: LatLon::new(25.0015, 54.99),
        end: LatLon::new(25.0015, 55.01),
        height: 8.0,
        transmission_loss: 6.0,
    };

    let with_strong = noise_level(
        &cfg,
        &source,
        &receiver,
        GroundType::Sand,
        std::slice::from_ref(&strong),
        &met,
    );
    let with_both =
        noise_level(&cfg, &source, &receiver, GroundType::Sand, &[strong, weak], &met);
    assert!((with_both.la_eq - with_strong.la_eq).abs() < 1e-9);
}

// ═══════════════════════════════════════════════════════════════════════════
// Adapter level arithmetic
// ═══════════════════════════════════════════════════════════════════════════

/// Quantity 1 at usage factor 1 reproduces the table sound power level
/// unchanged
#[test]
fn test_unit_equipment_reproduces_base_level() {
    let dataset = EquipmentDataset::default();
    let project = ProjectDescription {
        center: Some(LatLon::new(25.0, 55.0)),
        equipment: vec![EquipmentItem {
            id: "pd_1".to_string(),
            kind: EquipmentKind::PileDriver,
            location: None,
            height: 2.0,
            quantity: 1,
            usage_factor: 1.0,
            hours_per_day: 8.0,
            night_work: false,
        }],
        ..ProjectDescription::default()
    };

    let sources = noise_sources_from_project(&project, &dataset).unwrap();
    let (table_lw, _) = dataset.noise_level(EquipmentKind::PileDriver);
    assert!((sources[0].sound_power_level - table_lw).abs() < 1e-9);
}

// ═══════════════════════════════════════════════════════════════════════════
// Grids and contours
// ═══════════════════════════════════════════════════════════════════════════

/// Contour sets nest: every higher level encloses no more cells than a
/// lower one
#[test]
fn test_contour_levels_nest() {
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
    let source = NoiseSource::point("plant", LatLon::new(25.01, 55.01), 2.0, 120.0);

    let grid = noise_grid(
        &AcousticsConfig::default(),
        &[source],
        &spec,
        GroundType::Sand,
        &[],
        &MeteorologicalState::default(),
    );

    let contours = noise_contours(&grid, &[40.0, 45.0, 50.0, 55.0]);
    assert_eq!(contours.len(), 4);
    assert!(!contours[0].points.is_empty());
    for pair in contours.windows(2) {
        assert!(pair[1].points.len() <= pair[0].points.len() + 2);
    }
}

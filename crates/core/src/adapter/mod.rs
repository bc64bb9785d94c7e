//! Project-to-engine source mapping
//!
//! Pure translation of a [`ProjectDescription`] into engine-native emission
//! and noise sources. All structural validation happens here, before any
//! physics runs: non-finite or negative magnitudes are rejected with a
//! [`ConfigError`], while unknown equipment classes fall through to default
//! factors (preserved leniency, logged by the dataset lookups).
//!
//! # References
//! - US EPA AP-42, section 13.2.3 (heavy construction dust).

use std::f64::consts::PI;

use crate::config::EquipmentDataset;
use crate::core_types::project::{
    default_operating_hours, EquipmentItem, ProjectDescription, StackSpec,
};
use crate::core_types::source::{
    EmissionSource, NoiseSource, NoiseSourceKind, Pollutant, SourceKind, SpectrumShape, WorkPeriod,
};
use crate::core_types::spatial::LatLon;
use crate::error::ConfigError;
use rustc_hash::FxHashMap;
use tracing::{info, warn};

/// Default exhaust release height for mobile plant (m)
const EXHAUST_HEIGHT_M: f64 = 3.0;
/// Default exhaust pipe diameter (m)
const EXHAUST_DIAMETER_M: f64 = 0.1;
/// Default exhaust gas temperature (K)
const EXHAUST_TEMPERATURE_K: f64 = 400.0;
/// Default exhaust gas velocity (m/s)
const EXHAUST_VELOCITY_MS: f64 = 10.0;

/// Default stack exit temperature (K) when the project omits it
const STACK_TEMPERATURE_K: f64 = 400.0;
/// Default stack exit velocity (m/s) when the project omits it
const STACK_VELOCITY_MS: f64 = 15.0;

/// AP-42 fugitive dust factor for active construction, PM10 per hectare
/// per day
const DUST_PM10_FACTOR: f64 = 0.11;
/// PM2.5 share of fugitive construction dust
const DUST_PM25_FRACTION: f64 = 0.15;

/// Default installation sound power level (dB) when the project omits it
const INSTALLATION_LW_DB: f64 = 95.0;

/// Traffic line-source base level; `Lw = 80 + 10·log10(vehicles/hr)`
const TRAFFIC_BASE_LW_DB: f64 = 80.0;

fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::InvalidValue { field, value });
    }
    Ok(())
}

fn item_location(
    item_location: Option<LatLon>,
    project_center: Option<LatLon>,
    id: &str,
) -> Result<LatLon, ConfigError> {
    item_location.or(project_center).ok_or_else(|| {
        warn!(item = id, "item has no location and the project has no center");
        ConfigError::InvalidValue {
            field: "location",
            value: f64::NAN,
        }
    })
}

/// Build air emission sources from a project description
///
/// Equipment exhausts become low point sources using the per-class
/// emission-factor table (g/hr scaled by hours per day and quantity, to
/// g/s). An active construction footprint becomes a single near-ground area
/// dust source per AP-42. Stacks map through with defaulted exit conditions.
///
/// # Errors
/// [`ConfigError::InvalidValue`] for non-finite or negative quantities,
/// areas, or emission rates.
pub fn emission_sources_from_project(
    project: &ProjectDescription,
    dataset: &EquipmentDataset,
) -> Result<Vec<EmissionSource>, ConfigError> {
    let mut sources = Vec::new();

    for item in &project.equipment {
        sources.push(equipment_exhaust(item, project.center, dataset)?);
    }

    if let Some(area) = project.construction_area_m2 {
        require_non_negative("construction_area_m2", area)?;
        if area > 0.0 {
            let center = project.center.ok_or(ConfigError::InvalidValue {
                field: "center",
                value: f64::NAN,
            })?;
            sources.push(dust_area_source(center, area));
        }
    }

    for stack in &project.stacks {
        sources.push(stack_source(stack)?);
    }

    info!(sources = sources.len(), "emission sources adapted");
    Ok(sources)
}

fn equipment_exhaust(
    item: &EquipmentItem,
    center: Option<LatLon>,
    dataset: &EquipmentDataset,
) -> Result<EmissionSource, ConfigError> {
    if item.quantity == 0 {
        return Err(ConfigError::InvalidValue {
            field: "quantity",
            value: 0.0,
        });
    }
    require_non_negative("hours_per_day", item.hours_per_day)?;
    require_non_negative("height", item.height)?;

    let location = item_location(item.location, center, &item.id)?;

    // Table factors are g/hr; scale by daily operating hours, to g/s
    let emission_rates: FxHashMap<_, _> = dataset
        .emission_factors(item.kind)
        .iter()
        .map(|&(pollutant, g_per_hr)| {
            (pollutant, g_per_hr * item.hours_per_day / 3600.0)
        })
        .collect();

    Ok(EmissionSource {
        id: item.id.clone(),
        kind: SourceKind::Point,
        location,
        height: EXHAUST_HEIGHT_M,
        diameter: EXHAUST_DIAMETER_M,
        exit_temperature: EXHAUST_TEMPERATURE_K,
        exit_velocity: EXHAUST_VELOCITY_MS,
        emission_rates,
    })
}

fn dust_area_source(center: LatLon, area_m2: f64) -> EmissionSource {
    let hectares = area_m2 / 10_000.0;
    let pm10_g_s = DUST_PM10_FACTOR * hectares / 86_400.0;
    let pm25_g_s = pm10_g_s * DUST_PM25_FRACTION;

    let emission_rates: FxHashMap<_, _> = [(Pollutant::Pm10, pm10_g_s), (Pollutant::Pm25, pm25_g_s)]
        .into_iter()
        .collect();

    EmissionSource {
        id: "construction_dust".to_string(),
        kind: SourceKind::Area,
        location: center,
        height: 0.5,
        diameter: (area_m2 / PI).sqrt(),
        exit_temperature: 300.0,
        exit_velocity: 0.1,
        emission_rates,
    }
}

fn stack_source(stack: &StackSpec) -> Result<EmissionSource, ConfigError> {
    require_non_negative("height", stack.height)?;
    require_non_negative("diameter", stack.diameter)?;
    for &rate in stack.emission_rates.values() {
        require_non_negative("emission_rate", rate)?;
    }

    Ok(EmissionSource {
        id: stack.id.clone(),
        kind: SourceKind::Point,
        location: stack.location,
        height: stack.height,
        diameter: stack.diameter,
        exit_temperature: stack.exit_temperature.unwrap_or(STACK_TEMPERATURE_K),
        exit_velocity: stack.exit_velocity.unwrap_or(STACK_VELOCITY_MS),
        emission_rates: stack.emission_rates.clone(),
    })
}

/// Build noise sources from a project description
///
/// Equipment takes its sound power and spectrum shape from the per-class
/// table, with fleet size folded in as `10·log10(quantity)` and the duty
/// cycle as `10·log10(usage)`. Night-capable plant registers night operating
/// hours on top of the default day/evening map. Installations carry their
/// measured spectrum when present; traffic routes become line sources with
/// `Lw = 80 + 10·log10(vehicles/hr)`.
///
/// # Errors
/// [`ConfigError::InvalidValue`] for non-finite or out-of-range magnitudes.
pub fn noise_sources_from_project(
    project: &ProjectDescription,
    dataset: &EquipmentDataset,
) -> Result<Vec<NoiseSource>, ConfigError> {
    let mut sources = Vec::new();

    for item in &project.equipment {
        sources.push(equipment_noise(item, project.center, dataset)?);
    }

    for installation in &project.installations {
        let lw = installation.sound_power_level.unwrap_or(INSTALLATION_LW_DB);
        require_non_negative("sound_power_level", lw)?;
        require_non_negative("height", installation.height)?;

        sources.push(NoiseSource {
            id: installation.id.clone(),
            kind: NoiseSourceKind::Point,
            location: installation.location,
            height: installation.height,
            sound_power_level: lw,
            spectrum: installation.spectrum,
            shape: SpectrumShape::Tonal,
            operating_hours: all_day_hours(),
        });
    }

    for route in &project.traffic {
        require_finite("vehicles_per_hour", route.vehicles_per_hour)?;
        if route.vehicles_per_hour <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "vehicles_per_hour",
                value: route.vehicles_per_hour,
            });
        }

        sources.push(NoiseSource {
            id: route.id.clone(),
            kind: NoiseSourceKind::Line,
            location: route.center,
            height: 0.5,
            sound_power_level: TRAFFIC_BASE_LW_DB + 10.0 * route.vehicles_per_hour.log10(),
            spectrum: None,
            shape: SpectrumShape::LowFrequency,
            operating_hours: all_day_hours(),
        });
    }

    info!(sources = sources.len(), "noise sources adapted");
    Ok(sources)
}

fn equipment_noise(
    item: &EquipmentItem,
    center: Option<LatLon>,
    dataset: &EquipmentDataset,
) -> Result<NoiseSource, ConfigError> {
    if item.quantity == 0 {
        return Err(ConfigError::InvalidValue {
            field: "quantity",
            value: 0.0,
        });
    }
    require_finite("usage_factor", item.usage_factor)?;
    if item.usage_factor <= 0.0 || item.usage_factor > 1.0 {
        return Err(ConfigError::InvalidValue {
            field: "usage_factor",
            value: item.usage_factor,
        });
    }
    require_non_negative("height", item.height)?;

    let location = item_location(item.location, center, &item.id)?;
    let (base_lw, shape) = dataset.noise_level(item.kind);
    let lw =
        base_lw + 10.0 * f64::from(item.quantity).log10() + 10.0 * item.usage_factor.log10();

    let mut operating_hours = default_operating_hours();
    if item.night_work {
        operating_hours.insert(WorkPeriod::Night, (23, 7));
    }

    Ok(NoiseSource {
        id: item.id.clone(),
        kind: NoiseSourceKind::Point,
        location,
        height: item.height,
        sound_power_level: lw,
        spectrum: None,
        shape,
        operating_hours,
    })
}

/// Continuous operation: all three working periods
fn all_day_hours() -> FxHashMap<WorkPeriod, (u8, u8)> {
    [
        (WorkPeriod::Day, (7, 19)),
        (WorkPeriod::Evening, (19, 23)),
        (WorkPeriod::Night, (23, 7)),
    ]
    .into_iter()
    .collect()
}

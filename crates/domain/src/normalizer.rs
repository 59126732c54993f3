//! Telemetry normalizer — derives [`PlantView`]s from configuration and states.
//!
//! Pure and stateless: the same configs and snapshot always yield the same
//! views. Per-plant failures never abort the other plants.

use crate::entity::{EntityState, StateMap};
use crate::id::EntityId;
use crate::plant::{PlantConfig, SensorSlot};
use crate::status::{MOISTURE_WARNING_BELOW, Status};
use crate::view::{PlantReadings, PlantView};

/// Derive one view per configured plant, in configuration order.
#[must_use]
pub fn normalize(configs: &[PlantConfig], states: &StateMap) -> Vec<PlantView> {
    configs
        .iter()
        .map(|config| normalize_plant(config, states))
        .collect()
}

/// Derive the view of a single plant.
#[must_use]
pub fn normalize_plant(config: &PlantConfig, states: &StateMap) -> PlantView {
    let Some(moisture_state) = states.get(&config.moisture_entity) else {
        return PlantView::failed(
            config.clone(),
            format!("Entity {} not found", config.moisture_entity),
        );
    };

    let moisture = parse_float(&moisture_state.state).unwrap_or(f64::NAN);
    let battery = reading(config, states, SensorSlot::Battery);
    let is_irrigating = resolve(config.irrigation_switch.as_ref(), states)
        .is_some_and(EntityState::is_on);

    let readings = PlantReadings {
        moisture,
        temperature: reading(config, states, SensorSlot::Temperature),
        battery,
        light: reading(config, states, SensorSlot::Light),
        conductivity: reading(config, states, SensorSlot::Conductivity),
        uv: reading(config, states, SensorSlot::Uv),
        ambient_temp: reading(config, states, SensorSlot::AmbientTemp),
        soil_temp: reading(config, states, SensorSlot::SoilTemp),
        battery_status: Status::from_battery(battery),
        // NaN compares false, so an unavailable sensor never asks for water.
        needs_water: moisture < MOISTURE_WARNING_BELOW,
        is_irrigating,
    };

    PlantView::resolved(config.clone(), Status::from_moisture(moisture), readings)
}

fn resolve<'a>(entity_id: Option<&EntityId>, states: &'a StateMap) -> Option<&'a EntityState> {
    entity_id.and_then(|id| states.get(id))
}

/// Optional sensor value: unbound, missing and unparsable all read as `None`.
fn reading(config: &PlantConfig, states: &StateMap, slot: SensorSlot) -> Option<f64> {
    resolve(config.entity(slot), states).and_then(|state| parse_float(&state.state))
}

/// Parse the longest numeric prefix of `text`, like JavaScript's `parseFloat`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so
/// `"21.5 °C"` reads as `21.5`. `Infinity` (optionally signed) is accepted.
/// Returns `None` when no digits are found.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

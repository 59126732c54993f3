//! Plant view — the derived, render-ready state of one plant.
//!
//! Views are recomputed from scratch on every update and carry no identity
//! beyond their position in the list.

use serde::Serialize;

use crate::icon;
use crate::plant::PlantConfig;
use crate::status::Status;

/// Numeric readings and derived flags of a plant whose moisture sensor exists.
///
/// Equality treats two `NaN` moisture values as equal, so views derived
/// from the same inputs always compare equal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantReadings {
    /// Soil moisture (%). `NaN` when the sensor reports a non-numeric state.
    pub moisture: f64,
    pub temperature: Option<f64>,
    pub battery: Option<f64>,
    pub light: Option<f64>,
    pub conductivity: Option<f64>,
    pub uv: Option<f64>,
    pub ambient_temp: Option<f64>,
    pub soil_temp: Option<f64>,
    pub battery_status: Status,
    pub needs_water: bool,
    pub is_irrigating: bool,
}

impl PartialEq for PlantReadings {
    fn eq(&self, other: &Self) -> bool {
        let same_moisture = self.moisture == other.moisture
            || (self.moisture.is_nan() && other.moisture.is_nan());
        same_moisture
            && self.temperature == other.temperature
            && self.battery == other.battery
            && self.light == other.light
            && self.conductivity == other.conductivity
            && self.uv == other.uv
            && self.ambient_temp == other.ambient_temp
            && self.soil_temp == other.soil_temp
            && self.battery_status == other.battery_status
            && self.needs_water == other.needs_water
            && self.is_irrigating == other.is_irrigating
    }
}

/// A plant configuration together with everything derived from the states.
///
/// `readings` is `None` exactly when `status` is [`Status::Error`]: a plant
/// whose moisture entity is missing carries its configuration, the error and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantView {
    #[serde(flatten)]
    pub config: PlantConfig,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub readings: Option<PlantReadings>,
}

impl PlantView {
    /// View of a plant whose required sensor could not be resolved.
    #[must_use]
    pub fn failed(config: PlantConfig, error: impl Into<String>) -> Self {
        Self {
            config,
            status: Status::Error,
            error: Some(error.into()),
            readings: None,
        }
    }

    /// View of a plant with resolved readings.
    #[must_use]
    pub fn resolved(config: PlantConfig, status: Status, readings: PlantReadings) -> Self {
        Self {
            config,
            status,
            error: None,
            readings: Some(readings),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub fn moisture(&self) -> Option<f64> {
        self.readings.as_ref().map(|r| r.moisture)
    }

    #[must_use]
    pub fn battery(&self) -> Option<f64> {
        self.readings.as_ref().and_then(|r| r.battery)
    }

    /// Battery severity; `None` for error views.
    #[must_use]
    pub fn battery_status(&self) -> Option<Status> {
        self.readings.as_ref().map(|r| r.battery_status)
    }

    #[must_use]
    pub fn needs_water(&self) -> bool {
        self.readings.as_ref().is_some_and(|r| r.needs_water)
    }

    #[must_use]
    pub fn is_irrigating(&self) -> bool {
        self.readings.as_ref().is_some_and(|r| r.is_irrigating)
    }

    #[must_use]
    pub fn moisture_icon(&self) -> &'static str {
        icon::moisture(self.moisture())
    }

    #[must_use]
    pub fn battery_icon(&self) -> &'static str {
        icon::battery(self.battery())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ficus() -> PlantConfig {
        PlantConfig::builder()
            .name("Ficus")
            .moisture_entity("sensor.ficus")
            .build()
            .unwrap()
    }

    fn readings(moisture: f64) -> PlantReadings {
        PlantReadings {
            moisture,
            temperature: Some(21.5),
            battery: None,
            light: None,
            conductivity: None,
            uv: None,
            ambient_temp: None,
            soil_temp: None,
            battery_status: Status::Ok,
            needs_water: moisture < 40.0,
            is_irrigating: false,
        }
    }

    #[test]
    fn should_serialize_failed_view_with_config_and_error_only() {
        let view = PlantView::failed(ficus(), "Entity sensor.ficus not found");
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["name"], "Ficus");
        assert_eq!(json["moisture_entity"], "sensor.ficus");
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "Entity sensor.ficus not found");
        assert!(json.get("moisture").is_none());
        assert!(json.get("needsWater").is_none());
        assert!(json.get("batteryStatus").is_none());
    }

    #[test]
    fn should_serialize_resolved_view_with_camel_case_readings() {
        let view = PlantView::resolved(ficus(), Status::Critical, readings(15.0));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["status"], "critical");
        assert_eq!(json["moisture"], 15.0);
        assert_eq!(json["temperature"], 21.5);
        assert_eq!(json["needsWater"], true);
        assert_eq!(json["isIrrigating"], false);
        assert!(json["ambientTemp"].is_null());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn should_compare_unavailable_readings_as_equal() {
        assert_eq!(readings(f64::NAN), readings(f64::NAN));
        assert_ne!(readings(f64::NAN), readings(15.0));
        assert_ne!(readings(15.0), readings(16.0));
    }

    #[test]
    fn should_serialize_nan_moisture_as_null() {
        let view = PlantView::resolved(ficus(), Status::Unavailable, readings(f64::NAN));
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["moisture"].is_null());
    }

    #[test]
    fn should_report_no_derived_flags_for_failed_view() {
        let view = PlantView::failed(ficus(), "missing");
        assert!(view.is_error());
        assert!(!view.needs_water());
        assert!(!view.is_irrigating());
        assert!(view.battery().is_none());
        assert!(view.battery_status().is_none());
        assert_eq!(view.moisture_icon(), icon::MOISTURE_UNKNOWN);
        assert_eq!(view.battery_icon(), icon::BATTERY_UNKNOWN);
    }
}

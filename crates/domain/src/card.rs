//! Card configuration — the title, display toggles, and plant list.

use serde::{Deserialize, Serialize};

use crate::error::{PlantMonError, ValidationError};
use crate::id::EntityId;
use crate::plant::{PlantConfig, RawPlantConfig};

/// Title used when the configuration does not set one.
pub const DEFAULT_TITLE: &str = "My Plants";

/// Card configuration as authored in the dashboard.
///
/// Every field is optional here; [`CardConfig`] applies defaults and
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_chart: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_stats: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plants: Option<Vec<RawPlantConfig>>,
}

/// Validated card configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCardConfig", into = "RawCardConfig")]
pub struct CardConfig {
    pub title: String,
    /// Carried for the presentation layer; history charts are not derived here.
    pub show_chart: bool,
    pub show_stats: bool,
    pub plants: Vec<PlantConfig>,
}

impl CardConfig {
    /// Decode and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPlants`] when `plants` is absent or
    /// not an array, [`ValidationError::MissingMoistureEntity`] for a plant
    /// without a moisture sensor, and [`PlantMonError::Malformed`] when the
    /// document does not match the expected shape otherwise.
    pub fn from_json(value: serde_json::Value) -> Result<Self, PlantMonError> {
        if !value.get("plants").is_some_and(serde_json::Value::is_array) {
            return Err(ValidationError::MissingPlants.into());
        }
        let raw: RawCardConfig = serde_json::from_value(value)?;
        Ok(Self::try_from(raw)?)
    }

    /// Example configuration offered for a newly added card.
    #[must_use]
    pub fn stub() -> RawCardConfig {
        let plant = RawPlantConfig {
            name: "Plant 1".to_string(),
            location: Some("Living Room".to_string()),
            image: Some("/local/images/plants/plant1.jpg".to_string()),
            moisture_entity: EntityId::new("sensor.plant_1_soil_moisture").ok(),
            temperature_entity: EntityId::new("sensor.plant_1_temperature").ok(),
            battery_entity: EntityId::new("sensor.plant_1_battery").ok(),
            ..RawPlantConfig::default()
        };
        RawCardConfig {
            title: Some(DEFAULT_TITLE.to_string()),
            show_chart: Some(true),
            show_stats: Some(true),
            plants: Some(vec![plant]),
        }
    }

    /// Layout height hint in rows: one per plant plus the header.
    #[must_use]
    pub fn card_size(&self) -> usize {
        self.plants.len() + 1
    }
}

impl TryFrom<RawCardConfig> for CardConfig {
    type Error = ValidationError;

    fn try_from(raw: RawCardConfig) -> Result<Self, Self::Error> {
        let plants = raw
            .plants
            .ok_or(ValidationError::MissingPlants)?
            .into_iter()
            .map(PlantConfig::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            show_chart: raw.show_chart.unwrap_or(true),
            show_stats: raw.show_stats.unwrap_or(true),
            plants,
        })
    }
}

impl From<CardConfig> for RawCardConfig {
    fn from(config: CardConfig) -> Self {
        Self {
            title: Some(config.title),
            show_chart: Some(config.show_chart),
            show_stats: Some(config.show_stats),
            plants: Some(config.plants.into_iter().map(Into::into).collect()),
        }
    }
}

//! Plant — one monitored plant and the entities bound to it.
//!
//! Two shapes exist:
//! - [`RawPlantConfig`] is what the dashboard persists and the editor mutates.
//!   Every binding is optional, including the moisture sensor, and empty
//!   strings are read as "not bound".
//! - [`PlantConfig`] is the validated form consumed by the normalizer. Its
//!   moisture sensor is always present.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::id::EntityId;

/// A bindable entity slot on a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorSlot {
    Moisture,
    Temperature,
    Battery,
    Light,
    Conductivity,
    Uv,
    AmbientTemp,
    SoilTemp,
    IrrigationSwitch,
}

impl SensorSlot {
    /// Every slot, in editor order.
    pub const ALL: [Self; 9] = [
        Self::Moisture,
        Self::Temperature,
        Self::Battery,
        Self::Light,
        Self::Conductivity,
        Self::Uv,
        Self::AmbientTemp,
        Self::SoilTemp,
        Self::IrrigationSwitch,
    ];

    /// Host domain the editor offers for this slot (`sensor` or `switch`).
    #[must_use]
    pub fn entity_domain(self) -> &'static str {
        match self {
            Self::IrrigationSwitch => "switch",
            _ => "sensor",
        }
    }

    /// Configuration key of this slot (e.g. `"battery_entity"`).
    #[must_use]
    pub fn config_key(self) -> &'static str {
        match self {
            Self::Moisture => "moisture_entity",
            Self::Temperature => "temperature_entity",
            Self::Battery => "battery_entity",
            Self::Light => "light_entity",
            Self::Conductivity => "conductivity_entity",
            Self::Uv => "uv_entity",
            Self::AmbientTemp => "ambient_temp_entity",
            Self::SoilTemp => "soil_temp_entity",
            Self::IrrigationSwitch => "irrigation_switch",
        }
    }
}

impl std::fmt::Display for SensorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Plant configuration as authored in the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlantConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "blank_text_as_none", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_text_as_none", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub moisture_entity: Option<EntityId>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub temperature_entity: Option<EntityId>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub battery_entity: Option<EntityId>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub light_entity: Option<EntityId>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub conductivity_entity: Option<EntityId>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub uv_entity: Option<EntityId>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub ambient_temp_entity: Option<EntityId>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub soil_temp_entity: Option<EntityId>,
    #[serde(default, deserialize_with = "blank_id_as_none", skip_serializing_if = "Option::is_none")]
    pub irrigation_switch: Option<EntityId>,
}

impl RawPlantConfig {
    /// A fresh, unbound plant as added by the editor.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Entity bound to `slot`, if any.
    #[must_use]
    pub fn entity(&self, slot: SensorSlot) -> Option<&EntityId> {
        match slot {
            SensorSlot::Moisture => self.moisture_entity.as_ref(),
            SensorSlot::Temperature => self.temperature_entity.as_ref(),
            SensorSlot::Battery => self.battery_entity.as_ref(),
            SensorSlot::Light => self.light_entity.as_ref(),
            SensorSlot::Conductivity => self.conductivity_entity.as_ref(),
            SensorSlot::Uv => self.uv_entity.as_ref(),
            SensorSlot::AmbientTemp => self.ambient_temp_entity.as_ref(),
            SensorSlot::SoilTemp => self.soil_temp_entity.as_ref(),
            SensorSlot::IrrigationSwitch => self.irrigation_switch.as_ref(),
        }
    }

    /// Bind or unbind the entity for `slot`.
    pub fn set_entity(&mut self, slot: SensorSlot, entity: Option<EntityId>) {
        *self.slot_mut(slot) = entity;
    }

    fn slot_mut(&mut self, slot: SensorSlot) -> &mut Option<EntityId> {
        match slot {
            SensorSlot::Moisture => &mut self.moisture_entity,
            SensorSlot::Temperature => &mut self.temperature_entity,
            SensorSlot::Battery => &mut self.battery_entity,
            SensorSlot::Light => &mut self.light_entity,
            SensorSlot::Conductivity => &mut self.conductivity_entity,
            SensorSlot::Uv => &mut self.uv_entity,
            SensorSlot::AmbientTemp => &mut self.ambient_temp_entity,
            SensorSlot::SoilTemp => &mut self.soil_temp_entity,
            SensorSlot::IrrigationSwitch => &mut self.irrigation_switch,
        }
    }
}

/// Validated plant configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlantConfig", into = "RawPlantConfig")]
pub struct PlantConfig {
    pub name: String,
    pub location: Option<String>,
    pub image: Option<String>,
    pub moisture_entity: EntityId,
    pub temperature_entity: Option<EntityId>,
    pub battery_entity: Option<EntityId>,
    pub light_entity: Option<EntityId>,
    pub conductivity_entity: Option<EntityId>,
    pub uv_entity: Option<EntityId>,
    pub ambient_temp_entity: Option<EntityId>,
    pub soil_temp_entity: Option<EntityId>,
    pub irrigation_switch: Option<EntityId>,
}

impl PlantConfig {
    /// Create a builder for constructing a [`PlantConfig`].
    #[must_use]
    pub fn builder() -> PlantConfigBuilder {
        PlantConfigBuilder::default()
    }

    /// Entity bound to `slot`, if any. Moisture is always bound.
    #[must_use]
    pub fn entity(&self, slot: SensorSlot) -> Option<&EntityId> {
        match slot {
            SensorSlot::Moisture => Some(&self.moisture_entity),
            SensorSlot::Temperature => self.temperature_entity.as_ref(),
            SensorSlot::Battery => self.battery_entity.as_ref(),
            SensorSlot::Light => self.light_entity.as_ref(),
            SensorSlot::Conductivity => self.conductivity_entity.as_ref(),
            SensorSlot::Uv => self.uv_entity.as_ref(),
            SensorSlot::AmbientTemp => self.ambient_temp_entity.as_ref(),
            SensorSlot::SoilTemp => self.soil_temp_entity.as_ref(),
            SensorSlot::IrrigationSwitch => self.irrigation_switch.as_ref(),
        }
    }

    /// Whether the card can toggle irrigation for this plant.
    #[must_use]
    pub fn can_irrigate(&self) -> bool {
        self.irrigation_switch.is_some()
    }
}

impl TryFrom<RawPlantConfig> for PlantConfig {
    type Error = ValidationError;

    fn try_from(raw: RawPlantConfig) -> Result<Self, Self::Error> {
        let Some(moisture_entity) = raw.moisture_entity else {
            return Err(ValidationError::MissingMoistureEntity { plant: raw.name });
        };
        Ok(Self {
            name: raw.name,
            location: raw.location,
            image: raw.image,
            moisture_entity,
            temperature_entity: raw.temperature_entity,
            battery_entity: raw.battery_entity,
            light_entity: raw.light_entity,
            conductivity_entity: raw.conductivity_entity,
            uv_entity: raw.uv_entity,
            ambient_temp_entity: raw.ambient_temp_entity,
            soil_temp_entity: raw.soil_temp_entity,
            irrigation_switch: raw.irrigation_switch,
        })
    }
}

impl From<PlantConfig> for RawPlantConfig {
    fn from(plant: PlantConfig) -> Self {
        Self {
            name: plant.name,
            location: plant.location,
            image: plant.image,
            moisture_entity: Some(plant.moisture_entity),
            temperature_entity: plant.temperature_entity,
            battery_entity: plant.battery_entity,
            light_entity: plant.light_entity,
            conductivity_entity: plant.conductivity_entity,
            uv_entity: plant.uv_entity,
            ambient_temp_entity: plant.ambient_temp_entity,
            soil_temp_entity: plant.soil_temp_entity,
            irrigation_switch: plant.irrigation_switch,
        }
    }
}

/// Step-by-step builder for [`PlantConfig`].
///
/// Entity ids are accepted as strings and parsed in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct PlantConfigBuilder {
    name: Option<String>,
    location: Option<String>,
    image: Option<String>,
    entities: Vec<(SensorSlot, String)>,
}

impl PlantConfigBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Bind an entity id to `slot`.
    #[must_use]
    pub fn entity(mut self, slot: SensorSlot, entity_id: impl Into<String>) -> Self {
        self.entities.push((slot, entity_id.into()));
        self
    }

    #[must_use]
    pub fn moisture_entity(self, entity_id: impl Into<String>) -> Self {
        self.entity(SensorSlot::Moisture, entity_id)
    }

    #[must_use]
    pub fn battery_entity(self, entity_id: impl Into<String>) -> Self {
        self.entity(SensorSlot::Battery, entity_id)
    }

    #[must_use]
    pub fn temperature_entity(self, entity_id: impl Into<String>) -> Self {
        self.entity(SensorSlot::Temperature, entity_id)
    }

    #[must_use]
    pub fn irrigation_switch(self, entity_id: impl Into<String>) -> Self {
        self.entity(SensorSlot::IrrigationSwitch, entity_id)
    }

    /// Consume the builder, validate, and return a [`PlantConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEntityId`] for a blank id and
    /// [`ValidationError::MissingMoistureEntity`] when no moisture sensor
    /// was bound.
    pub fn build(self) -> Result<PlantConfig, ValidationError> {
        let mut raw = RawPlantConfig {
            name: self.name.unwrap_or_default(),
            location: self.location,
            image: self.image,
            ..RawPlantConfig::default()
        };
        for (slot, entity_id) in self.entities {
            raw.set_entity(slot, Some(EntityId::new(entity_id)?));
        }
        PlantConfig::try_from(raw)
    }
}

fn blank_text_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(d)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

fn blank_id_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<EntityId>, D::Error> {
    let value = Option::<String>::deserialize(d)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => EntityId::new(text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

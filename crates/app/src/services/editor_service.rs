//! Editor use-cases — edit the card configuration and announce each change.

use plantmon_domain::card::RawCardConfig;
use plantmon_domain::entity::StateMap;
use plantmon_domain::error::{NotFoundError, PlantMonError};
use plantmon_domain::event::CardEvent;
use plantmon_domain::id::EntityId;
use plantmon_domain::plant::{RawPlantConfig, SensorSlot};

use crate::ports::EventPublisher;

/// Application service for the configuration editor.
///
/// Works on the unvalidated [`RawCardConfig`] so that drafts (a plant not
/// yet bound to a moisture sensor) can be held. Every successful edit
/// publishes a [`CardEvent::ConfigChanged`] carrying the full document.
pub struct EditorService<P> {
    publisher: P,
    config: RawCardConfig,
}

impl<P: EventPublisher> EditorService<P> {
    /// Start editing the given configuration.
    pub fn new(publisher: P, config: RawCardConfig) -> Self {
        Self { publisher, config }
    }

    /// Current draft.
    pub fn config(&self) -> &RawCardConfig {
        &self.config
    }

    /// Change the card title.
    ///
    /// # Errors
    ///
    /// Returns an error if the change event cannot be published.
    pub async fn set_title(&mut self, title: impl Into<String>) -> Result<(), PlantMonError> {
        self.config.title = Some(title.into());
        self.emit().await
    }

    /// Toggle the statistics row.
    ///
    /// # Errors
    ///
    /// Returns an error if the change event cannot be published.
    pub async fn set_show_stats(&mut self, show: bool) -> Result<(), PlantMonError> {
        self.config.show_stats = Some(show);
        self.emit().await
    }

    /// Toggle the history chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the change event cannot be published.
    pub async fn set_show_chart(&mut self, show: bool) -> Result<(), PlantMonError> {
        self.config.show_chart = Some(show);
        self.emit().await
    }

    /// Append a plant with no bindings and return its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the change event cannot be published.
    pub async fn add_plant(&mut self) -> Result<usize, PlantMonError> {
        let plants = self.config.plants.get_or_insert_with(Vec::new);
        let index = plants.len();
        plants.push(RawPlantConfig::named(format!("Plant {}", index + 1)));
        tracing::debug!(index, "plant added");
        self.emit().await?;
        Ok(index)
    }

    /// Remove the plant at `index` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no plant exists at `index`, or an error
    /// if the change event cannot be published.
    pub async fn remove_plant(&mut self, index: usize) -> Result<RawPlantConfig, PlantMonError> {
        let plants = self
            .config
            .plants
            .as_mut()
            .filter(|plants| index < plants.len())
            .ok_or_else(|| plant_not_found(index))?;
        let removed = plants.remove(index);
        tracing::debug!(index, name = %removed.name, "plant removed");
        self.emit().await?;
        Ok(removed)
    }

    /// Rename the plant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no plant exists at `index`, or an error
    /// if the change event cannot be published.
    pub async fn set_plant_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), PlantMonError> {
        self.plant_mut(index)?.name = name.into();
        self.emit().await
    }

    /// Set or clear the location label of the plant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no plant exists at `index`, or an error
    /// if the change event cannot be published.
    pub async fn set_plant_location(
        &mut self,
        index: usize,
        location: Option<String>,
    ) -> Result<(), PlantMonError> {
        self.plant_mut(index)?.location = location.filter(|l| !l.trim().is_empty());
        self.emit().await
    }

    /// Set or clear the image path of the plant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no plant exists at `index`, or an error
    /// if the change event cannot be published.
    pub async fn set_plant_image(
        &mut self,
        index: usize,
        image: Option<String>,
    ) -> Result<(), PlantMonError> {
        self.plant_mut(index)?.image = image.filter(|i| !i.trim().is_empty());
        self.emit().await
    }

    /// Bind (or unbind, with `None`) an entity to a sensor slot of the plant
    /// at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no plant exists at `index`, or an error
    /// if the change event cannot be published.
    pub async fn bind_entity(
        &mut self,
        index: usize,
        slot: SensorSlot,
        entity: Option<EntityId>,
    ) -> Result<(), PlantMonError> {
        tracing::debug!(
            index,
            slot = %slot,
            entity = entity.as_ref().map(EntityId::as_str),
            "binding entity"
        );
        self.plant_mut(index)?.set_entity(slot, entity);
        self.emit().await
    }

    fn plant_mut(&mut self, index: usize) -> Result<&mut RawPlantConfig, NotFoundError> {
        self.config
            .plants
            .as_mut()
            .and_then(|plants| plants.get_mut(index))
            .ok_or_else(|| plant_not_found(index))
    }

    async fn emit(&self) -> Result<(), PlantMonError> {
        self.publisher
            .publish(CardEvent::ConfigChanged {
                config: self.config.clone(),
            })
            .await
    }
}

fn plant_not_found(index: usize) -> NotFoundError {
    NotFoundError {
        entity: "Plant",
        id: index.to_string(),
    }
}

/// Entities that can be bound to `slot`, sorted by id.
///
/// Sensor slots list `sensor.*` entities, the irrigation slot lists
/// `switch.*` entities.
pub fn entity_candidates(states: &StateMap, slot: SensorSlot) -> Vec<EntityId> {
    let domain = slot.entity_domain();
    let mut ids: Vec<EntityId> = states
        .keys()
        .filter(|id| id.domain() == domain)
        .cloned()
        .collect();
    ids.sort();
    ids
}

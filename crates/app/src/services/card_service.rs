//! Card use-cases — configuration, state snapshots, views, and user actions.

use plantmon_domain::card::{CardConfig, RawCardConfig};
use plantmon_domain::entity::StateMap;
use plantmon_domain::error::PlantMonError;
use plantmon_domain::event::CardEvent;
use plantmon_domain::id::EntityId;
use plantmon_domain::normalizer::normalize;
use plantmon_domain::service::ServiceCall;
use plantmon_domain::stats::{Stats, aggregate};
use plantmon_domain::view::PlantView;

use crate::ports::{EventPublisher, ServiceCaller};

/// Row hint reported before any configuration has been accepted.
const UNCONFIGURED_CARD_SIZE: usize = 2;

/// Application service for the plant card.
///
/// Holds the last accepted configuration and state snapshot, and keeps the
/// derived plant views in sync with both. Views are only produced once both
/// a configuration and a snapshot have been received.
pub struct CardService<S, P> {
    caller: S,
    publisher: P,
    config: Option<CardConfig>,
    states: Option<StateMap>,
    views: Vec<PlantView>,
}

impl<S, P> CardService<S, P>
where
    S: ServiceCaller,
    P: EventPublisher,
{
    /// Create a new service backed by the given host ports.
    pub fn new(caller: S, publisher: P) -> Self {
        Self {
            caller,
            publisher,
            config: None,
            states: None,
            views: Vec::new(),
        }
    }

    /// Validate and accept a configuration, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns a validation error when a plant lacks its moisture sensor.
    /// The previously accepted configuration stays in place in that case.
    pub fn set_config(&mut self, raw: RawCardConfig) -> Result<&CardConfig, PlantMonError> {
        let config = CardConfig::try_from(raw)?;
        Ok(self.accept(config))
    }

    /// Decode, validate and accept a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPlants`](plantmon_domain::error::ValidationError::MissingPlants)
    /// when the document has no plant list, or any error from [`CardConfig::from_json`].
    pub fn set_config_json(
        &mut self,
        value: serde_json::Value,
    ) -> Result<&CardConfig, PlantMonError> {
        let config = CardConfig::from_json(value)?;
        Ok(self.accept(config))
    }

    fn accept(&mut self, config: CardConfig) -> &CardConfig {
        tracing::info!(
            title = %config.title,
            plants = config.plants.len(),
            "card configuration accepted"
        );
        let config = self.config.insert(config);
        if let Some(states) = &self.states {
            self.views = normalize(&config.plants, states);
        }
        config
    }

    /// Replace the entity state snapshot and recompute the plant views.
    pub fn update_states(&mut self, states: StateMap) {
        tracing::debug!(entities = states.len(), "state snapshot received");
        let states = self.states.insert(states);
        if let Some(config) = &self.config {
            self.views = normalize(&config.plants, states);
        }
    }

    /// Currently accepted configuration, if any.
    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    /// Plant views derived from the latest configuration and snapshot.
    pub fn views(&self) -> &[PlantView] {
        &self.views
    }

    /// Summary counts, or `None` when statistics are hidden or there is
    /// nothing to summarize.
    pub fn stats(&self) -> Option<Stats> {
        let config = self.config.as_ref()?;
        if !config.show_stats || self.views.is_empty() {
            return None;
        }
        Some(aggregate(&self.views))
    }

    /// Layout height hint in rows.
    pub fn card_size(&self) -> usize {
        self.config
            .as_ref()
            .map_or(UNCONFIGURED_CARD_SIZE, CardConfig::card_size)
    }

    /// Flip the irrigation switch of the plant at `index`.
    ///
    /// The switch direction is decided from the live snapshot at call time.
    /// Host failures are logged, not returned: the next snapshot reflects
    /// whatever actually happened. Returns the call that was issued, if any.
    pub async fn toggle_irrigation(&self, index: usize) -> Option<ServiceCall> {
        let Some(plant) = self.config.as_ref().and_then(|c| c.plants.get(index)) else {
            tracing::debug!(index, "toggle requested for unknown plant");
            return None;
        };
        let Some(switch) = plant.irrigation_switch.as_ref() else {
            tracing::debug!(plant = %plant.name, "plant has no irrigation switch");
            return None;
        };
        let Some(state) = self.states.as_ref().and_then(|s| s.get(switch)) else {
            tracing::warn!(plant = %plant.name, switch = %switch, "irrigation switch not found");
            return None;
        };

        let call = ServiceCall::toggle_switch(switch, state.is_on());
        tracing::info!(plant = %plant.name, call = %call, "toggling irrigation");
        if let Err(err) = self.caller.call_service(call.clone()).await {
            tracing::error!(error = %err, call = %call, "irrigation toggle failed");
        }
        Some(call)
    }

    /// Ask the host to open the detail dialog for an entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be published.
    pub async fn more_info(&self, entity_id: EntityId) -> Result<(), PlantMonError> {
        tracing::debug!(entity_id = %entity_id, "more-info requested");
        self.publisher
            .publish(CardEvent::MoreInfo { entity_id })
            .await
    }

    /// Example configuration for a freshly added card.
    pub fn stub_config() -> RawCardConfig {
        CardConfig::stub()
    }
}

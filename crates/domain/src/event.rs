//! Card events — notifications the card and its editor emit to the host.

use serde::{Deserialize, Serialize};

use crate::card::RawCardConfig;
use crate::id::EntityId;

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardEvent {
    /// The editor changed the configuration; carries the full new document.
    ConfigChanged { config: RawCardConfig },
    /// The user asked for the host's detail dialog of an entity.
    MoreInfo { entity_id: EntityId },
}

impl CardEvent {
    /// Host event name (`config-changed`, `hass-more-info`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConfigChanged { .. } => "config-changed",
            Self::MoreInfo { .. } => "hass-more-info",
        }
    }
}

impl std::fmt::Display for CardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigChanged { config } => {
                let plants = config.plants.as_ref().map_or(0, Vec::len);
                write!(f, "config_changed({plants} plants)")
            }
            Self::MoreInfo { entity_id } => write!(f, "more_info({entity_id})"),
        }
    }
}

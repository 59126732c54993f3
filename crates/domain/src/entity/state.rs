//! Entity state — the raw value the host reports for an entity.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// UTC timestamp used for `last_updated`.
pub type Timestamp = DateTime<Utc>;

/// Read-only snapshot of every entity the host knows about.
pub type StateMap = HashMap<EntityId, EntityState>;

/// Raw state string reported by the host plus its update time.
///
/// The state is kept verbatim (`"42.5"`, `"on"`, `"unavailable"`, …);
/// interpretation happens in the [normalizer](crate::normalizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    pub state: String,
    #[serde(default = "Utc::now")]
    pub last_updated: Timestamp,
}

impl EntityState {
    /// Create a state stamped with the current time.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            last_updated: Utc::now(),
        }
    }

    /// Create a state with an explicit update time.
    #[must_use]
    pub fn at(state: impl Into<String>, last_updated: Timestamp) -> Self {
        Self {
            state: state.into(),
            last_updated,
        }
    }

    /// Whether a switch-like entity reports exactly `"on"`.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state == "on"
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_on_only_for_exact_on_state() {
        assert!(EntityState::new("on").is_on());
        assert!(!EntityState::new("off").is_on());
        assert!(!EntityState::new("ON").is_on());
        assert!(!EntityState::new("unavailable").is_on());
    }

    #[test]
    fn should_display_raw_state() {
        assert_eq!(EntityState::new("42.5").to_string(), "42.5");
    }

    #[test]
    fn should_default_last_updated_when_missing_from_json() {
        let before = Utc::now();
        let state: EntityState = serde_json::from_str(r#"{"state": "15"}"#).unwrap();
        assert_eq!(state.state, "15");
        assert!(state.last_updated >= before);
    }

    #[test]
    fn should_parse_last_updated_from_json() {
        let state: EntityState = serde_json::from_str(
            r#"{"state": "off", "last_updated": "2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(state.last_updated.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }
}

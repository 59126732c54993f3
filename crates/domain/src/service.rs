//! Service — a command sent to the host, e.g. `switch.turn_on`.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// A service invocation addressed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCall {
    /// Service domain, e.g. `"switch"`.
    pub domain: String,
    /// Service name, e.g. `"turn_on"`.
    pub service: String,
    /// Service payload, `{"entity_id": …}` for switch commands.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ServiceCall {
    /// Build a call targeting a single entity.
    #[must_use]
    pub fn for_entity(
        domain: impl Into<String>,
        service: impl Into<String>,
        entity_id: &EntityId,
    ) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            data: serde_json::json!({ "entity_id": entity_id }),
        }
    }

    /// The call that flips an irrigation switch from its current state:
    /// `turn_off` when it is on, `turn_on` otherwise.
    #[must_use]
    pub fn toggle_switch(entity_id: &EntityId, currently_on: bool) -> Self {
        let service = if currently_on { "turn_off" } else { "turn_on" };
        Self::for_entity("switch", service, entity_id)
    }

    /// Entity targeted by this call, if the payload names one.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.data.get("entity_id").and_then(serde_json::Value::as_str)
    }
}

impl std::fmt::Display for ServiceCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.domain, self.service)?;
        if let Some(target) = self.target() {
            write!(f, "({target})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump() -> EntityId {
        EntityId::new("switch.pump").unwrap()
    }

    #[test]
    fn should_turn_off_switch_that_is_on() {
        let call = ServiceCall::toggle_switch(&pump(), true);
        assert_eq!(call.domain, "switch");
        assert_eq!(call.service, "turn_off");
        assert_eq!(call.data, serde_json::json!({ "entity_id": "switch.pump" }));
    }

    #[test]
    fn should_turn_on_switch_that_is_off() {
        let call = ServiceCall::toggle_switch(&pump(), false);
        assert_eq!(call.service, "turn_on");
        assert_eq!(call.target(), Some("switch.pump"));
    }

    #[test]
    fn should_display_domain_service_and_target() {
        let call = ServiceCall::toggle_switch(&pump(), false);
        assert_eq!(call.to_string(), "switch.turn_on(switch.pump)");
    }

    #[test]
    fn should_deserialize_call_with_default_data() {
        let call: ServiceCall =
            serde_json::from_str(r#"{"domain": "switch", "service": "turn_off"}"#).unwrap();
        assert!(call.data.is_null());
        assert!(call.target().is_none());
        assert_eq!(call.to_string(), "switch.turn_off");
    }
}

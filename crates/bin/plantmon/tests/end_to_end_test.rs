//! End-to-end tests for the full plantmon stack.
//!
//! Each test wires the real snapshot adapter, the real services and the
//! in-process event bus around JSON fixtures — no file system access beyond
//! the fixtures compiled into the test binary.

use std::sync::Arc;

use plantmon_adapter_snapshot::{RecordingServiceCaller, parse_states};
use plantmon_app::event_bus::InProcessEventBus;
use plantmon_app::services::card_service::CardService;
use plantmon_app::services::editor_service::{EditorService, entity_candidates};
use plantmon_domain::card::RawCardConfig;
use plantmon_domain::event::CardEvent;
use plantmon_domain::id::EntityId;
use plantmon_domain::plant::SensorSlot;
use plantmon_domain::status::Status;

const CARD: &str = include_str!("fixtures/card.json");
const STATES: &str = include_str!("fixtures/states.json");

type Card = CardService<Arc<RecordingServiceCaller>, Arc<InProcessEventBus>>;

/// Build a card service fed with the fixtures.
fn card() -> (Card, Arc<RecordingServiceCaller>, Arc<InProcessEventBus>) {
    let caller = Arc::new(RecordingServiceCaller::default());
    let bus = Arc::new(InProcessEventBus::new(16));
    let mut card = CardService::new(Arc::clone(&caller), Arc::clone(&bus));

    let config: serde_json::Value = serde_json::from_str(CARD).unwrap();
    card.set_config_json(config)
        .expect("fixture config should validate");
    card.update_states(parse_states(STATES).expect("fixture states should parse"));

    (card, caller, bus)
}

fn id(value: &str) -> EntityId {
    EntityId::new(value).unwrap()
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn should_derive_one_view_per_plant_in_order() {
    let (card, _, _) = card();
    let names: Vec<_> = card
        .views()
        .iter()
        .map(|v| v.config.name.as_str())
        .collect();
    assert_eq!(names, ["Basil", "Ficus", "Orchid", "Cactus"]);
}

#[test]
fn should_classify_each_plant_from_fixture_states() {
    let (card, _, _) = card();
    let views = card.views();

    assert_eq!(views[0].status, Status::Critical);
    assert_eq!(views[0].battery_status(), Some(Status::Critical));
    assert!(views[0].needs_water());
    assert!(!views[0].is_irrigating());

    assert_eq!(views[1].status, Status::Ok);
    assert_eq!(views[1].readings.as_ref().unwrap().light, None);

    assert_eq!(views[2].status, Status::Warning);
    assert_eq!(views[2].moisture(), Some(33.0));
    assert!(views[2].is_irrigating());

    assert_eq!(views[3].status, Status::Error);
    assert_eq!(
        views[3].error.as_deref(),
        Some("Entity sensor.cactus_moisture not found")
    );
    assert!(views[3].readings.is_none());
}

#[test]
fn should_aggregate_fixture_stats() {
    let (card, _, _) = card();
    let stats = card.stats().unwrap();

    assert_eq!(stats.total, 4);
    assert_eq!(stats.needs_water, 2);
    assert_eq!(stats.healthy, 1);
    assert_eq!(stats.low_battery, 1);
    assert_eq!(stats.irrigating, 1);
    assert_eq!(card.card_size(), 5);
}

#[test]
fn should_serialize_views_for_the_report() {
    let (card, _, _) = card();
    let json = serde_json::to_value(card.views()).unwrap();

    assert_eq!(json[0]["name"], "Basil");
    assert_eq!(json[0]["moisture"], 12.5);
    assert_eq!(json[0]["needsWater"], true);
    assert_eq!(json[0]["batteryStatus"], "critical");
    assert_eq!(json[3]["status"], "error");
    assert!(json[3].get("moisture").is_none());
}

// ---------------------------------------------------------------------------
// Irrigation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_issue_opposite_switch_calls_when_toggling() {
    let (card, caller, _) = card();

    card.toggle_irrigation(0).await.unwrap();
    card.toggle_irrigation(2).await.unwrap();
    assert!(card.toggle_irrigation(1).await.is_none());
    assert!(card.toggle_irrigation(9).await.is_none());

    let calls = caller.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].to_string(), "switch.turn_on(switch.kitchen_pump)");
    assert_eq!(calls[1].to_string(), "switch.turn_off(switch.orchid_mister)");
}

#[tokio::test]
async fn should_publish_more_info_on_the_bus() {
    let (card, _, bus) = card();
    let mut rx = bus.subscribe();

    card.more_info(id("sensor.basil_moisture")).await.unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        CardEvent::MoreInfo {
            entity_id: id("sensor.basil_moisture")
        }
    );
}

// ---------------------------------------------------------------------------
// Editor round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_feed_editor_changes_back_into_the_card() {
    let (mut card, _, _) = card();
    let bus = Arc::new(InProcessEventBus::new(16));
    let mut rx = bus.subscribe();
    let draft: RawCardConfig = card.config().unwrap().clone().into();
    let mut editor = EditorService::new(Arc::clone(&bus), draft);

    editor.remove_plant(3).await.unwrap();
    let index = editor.add_plant().await.unwrap();
    editor
        .bind_entity(index, SensorSlot::Moisture, Some(id("sensor.ficus_moisture")))
        .await
        .unwrap();

    // Only the last published document matters to the card.
    let mut latest = None;
    while let Ok(CardEvent::ConfigChanged { config }) = rx.try_recv() {
        latest = Some(config);
    }
    card.set_config(latest.unwrap()).unwrap();

    assert_eq!(card.views().len(), 4);
    assert_eq!(card.views()[3].config.name, "Plant 4");
    assert_eq!(card.views()[3].status, Status::Ok);
    assert_eq!(card.stats().unwrap().healthy, 2);
}

#[test]
fn should_list_fixture_candidates_per_slot() {
    let states = parse_states(STATES).unwrap();

    let switches = entity_candidates(&states, SensorSlot::IrrigationSwitch);
    assert_eq!(
        switches,
        vec![id("switch.kitchen_pump"), id("switch.orchid_mister")]
    );

    let sensors = entity_candidates(&states, SensorSlot::Moisture);
    assert_eq!(sensors.len(), 7);
    assert!(sensors.iter().all(|s| s.domain() == "sensor"));
}

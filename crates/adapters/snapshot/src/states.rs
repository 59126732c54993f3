//! State dump decoding.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use plantmon_domain::entity::{EntityState, StateMap};
use plantmon_domain::id::EntityId;

use crate::error::SnapshotError;

/// Accepted top-level shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum Dump {
    /// `/api/states`: `[{ "entity_id": …, "state": …, "last_updated": …, … }]`
    List(Vec<StateRecord>),
    /// `{ "<entity_id>": { "state": … } | "<state>" | <number> }`
    Map(HashMap<String, MapEntry>),
}

#[derive(Deserialize)]
struct StateRecord {
    entity_id: String,
    #[serde(flatten)]
    state: EntityState,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MapEntry {
    Full(EntityState),
    Text(String),
    Number(serde_json::Number),
}

impl From<MapEntry> for EntityState {
    fn from(entry: MapEntry) -> Self {
        match entry {
            MapEntry::Full(state) => state,
            MapEntry::Text(text) => EntityState::new(text),
            MapEntry::Number(number) => EntityState::new(number.to_string()),
        }
    }
}

/// Decode a state dump.
///
/// When the array form lists the same entity twice, the later entry wins.
/// Entries with a blank entity id are skipped.
///
/// # Errors
///
/// Returns [`SnapshotError::Json`] when the document matches neither format.
pub fn parse_states(json: &str) -> Result<StateMap, SnapshotError> {
    let entries: Vec<(String, EntityState)> = match serde_json::from_str(json)? {
        Dump::List(records) => records
            .into_iter()
            .map(|record| (record.entity_id, record.state))
            .collect(),
        Dump::Map(map) => map
            .into_iter()
            .map(|(id, entry)| (id, entry.into()))
            .collect(),
    };

    let mut states = StateMap::with_capacity(entries.len());
    for (id, state) in entries {
        match EntityId::new(id) {
            Ok(id) => {
                states.insert(id, state);
            }
            Err(err) => tracing::warn!(error = %err, "skipping snapshot entry"),
        }
    }
    tracing::debug!(entities = states.len(), "state snapshot decoded");
    Ok(states)
}

/// Read and decode a state dump from disk.
///
/// # Errors
///
/// Returns [`SnapshotError::Read`] when the file cannot be read, or any
/// error from [`parse_states`].
pub async fn load_states(path: impl AsRef<Path>) -> Result<StateMap, SnapshotError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), "loading state snapshot");
    parse_states(&json)
}

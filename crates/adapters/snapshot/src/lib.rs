//! # plantmon-adapter-snapshot
//!
//! Host adapter backed by plain JSON files instead of a live connection.
//!
//! ## Provided pieces
//!
//! | Item | Role |
//! |------|------|
//! | [`parse_states`] / [`load_states`] | Decode a state dump into a [`StateMap`](plantmon_domain::entity::StateMap) |
//! | [`RecordingServiceCaller`] | [`ServiceCaller`](plantmon_app::ports::ServiceCaller) that logs and keeps every call |
//!
//! Two dump formats are accepted: the array returned by the Home Assistant
//! REST endpoint `/api/states`, and an object keyed by entity id.
//!
//! ## Dependency rule
//!
//! Depends on `plantmon-app` (port traits) and `plantmon-domain` only.

mod caller;
pub mod error;
mod states;

pub use caller::RecordingServiceCaller;
pub use error::SnapshotError;
pub use states::{load_states, parse_states};

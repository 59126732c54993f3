//! # plantmon-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceCaller` — forward service calls (irrigation toggles) to the host
//!   - `EventPublisher` — emit card events (`config-changed`, `hass-more-info`)
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CardService` — accept configuration and state snapshots, expose views
//!     and statistics, toggle irrigation, request entity details
//!   - `EditorService` — edit the card configuration and announce every change
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `plantmon-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;

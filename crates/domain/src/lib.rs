//! # plantmon-domain
//!
//! Pure domain model for the plantmon plant-health card.
//!
//! ## Responsibilities
//! - Foundational types: entity identifiers, error conventions, timestamps
//! - Define **entity states** (the host's read-only snapshot of sensor values)
//! - Define **plants** and the **card configuration** that groups them
//! - Derive **plant views** from configuration + states (the telemetry normalizer)
//! - Roll views up into **statistics**
//! - Map readings to **icon keys** consumed by the presentation layer
//! - Define **service calls** and **card events** that flow back to the host
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod card;
pub mod entity;
pub mod event;
pub mod icon;
pub mod normalizer;
pub mod plant;
pub mod service;
pub mod stats;
pub mod status;
pub mod view;

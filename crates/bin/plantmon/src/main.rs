//! # plantmon — plant report
//!
//! Composition root that wires the snapshot adapter into the card service.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialize logging
//! - Read the entity state snapshot
//! - Construct application services, injecting adapters via port traits
//! - Print the resulting plant report as JSON on stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod command;
mod config;
mod report;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use plantmon_adapter_snapshot::{RecordingServiceCaller, load_states};
use plantmon_app::event_bus::InProcessEventBus;
use plantmon_app::services::card_service::CardService;

use crate::command::Command;
use crate::config::Config;
use crate::report::Report;

type Card = CardService<Arc<RecordingServiceCaller>, InProcessEventBus>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = Command::parse(std::env::args().skip(1))?;
    if !command.requires_config() {
        println!("{}", serde_json::to_string_pretty(&Card::stub_config())?);
        return Ok(());
    }

    let config = Config::load().context("unable to load configuration")?;
    init_tracing(&config.logging.filter);

    // Adapters
    let states = load_states(&config.snapshot.path)
        .await
        .context("unable to load state snapshot")?;
    let caller = Arc::new(RecordingServiceCaller::default());
    let event_bus = InProcessEventBus::new(16);

    // Services
    let mut card = Card::new(Arc::clone(&caller), event_bus);
    card.set_config(config.card)
        .context("invalid card configuration")?;
    card.update_states(states);

    if let Command::Toggle(index) = command
        && card.toggle_irrigation(index).await.is_none()
    {
        tracing::warn!(index, "no irrigation call issued");
    }

    let title = card.config().map_or("", |c| c.title.as_str());
    let report = Report {
        title,
        plants: card.views(),
        stats: card.stats(),
        calls: caller.calls(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}: {err}, falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

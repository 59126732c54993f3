//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlantMonError`] via `#[from]`.

/// Top-level error shared by every plantmon crate.
#[derive(Debug, thiserror::Error)]
pub enum PlantMonError {
    /// Configuration or value failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A configuration document could not be decoded.
    #[error("malformed configuration")]
    Malformed(#[from] serde_json::Error),

    /// The host environment (service invocation, snapshot source, …) failed.
    #[error("host error")]
    Host(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a configuration or value is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The card configuration has no `plants` array.
    #[error("at least one plant list must be defined")]
    MissingPlants,

    /// A plant is missing its required soil moisture sensor.
    #[error("plant {plant}: moisture sensor is required")]
    MissingMoistureEntity {
        /// Name of the offending plant.
        plant: String,
    },

    /// An entity id is empty or whitespace only.
    #[error("invalid entity id {0:?}")]
    InvalidEntityId(String),
}

/// A lookup by index or key found nothing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of item that was looked up (e.g. `"Plant"`).
    pub entity: &'static str,
    /// Key used for the lookup.
    pub id: String,
}

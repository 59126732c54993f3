//! Snapshot adapter error types.

use std::path::PathBuf;

use plantmon_domain::error::PlantMonError;

/// Errors specific to the snapshot adapter.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("unable to read snapshot {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or has an unexpected shape.
    #[error("malformed snapshot")]
    Json(#[from] serde_json::Error),
}

impl SnapshotError {
    /// Convert into a [`PlantMonError`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> PlantMonError {
        PlantMonError::Host(Box::new(self))
    }
}

impl From<SnapshotError> for PlantMonError {
    fn from(err: SnapshotError) -> Self {
        err.into_domain()
    }
}

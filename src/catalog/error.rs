//! Catalog loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a catalog file.
///
/// Both are fatal: there is no partial-catalog mode.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

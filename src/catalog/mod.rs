//! Largo and slime catalog.
//!
//! Loads the two JSON catalog files and keeps them for the rest of the
//! session. Only the `selected` flags change after loading; the order and
//! contents of both lists stay fixed.

mod error;
mod types;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

pub use error::CatalogError;
pub use types::{Food, Largo, Largoable, Slime};

/// The loaded largo and slime lists.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Largos sorted by primary slime type, file order kept for ties
    pub largos: Vec<Largo>,
    /// Slimes in file order
    pub slimes: Vec<Slime>,
}

impl Catalog {
    /// Build a catalog from already parsed lists, applying the largo ordering.
    pub fn from_parts(mut largos: Vec<Largo>, slimes: Vec<Slime>) -> Self {
        sort_largos(&mut largos);
        Self { largos, slimes }
    }

    /// Load both catalog files.
    ///
    /// The two reads run in parallel and this returns only once both are
    /// done. The first error (largos checked first) is returned.
    pub fn load(largo_path: &Path, slime_path: &Path) -> Result<Self, CatalogError> {
        let (largos, slimes) = rayon::join(|| load_largos(largo_path), || load_slimes(slime_path));
        let largos = largos?;
        let slimes = slimes?;

        tracing::info!(
            largos = largos.len(),
            slimes = slimes.len(),
            "catalog loaded"
        );
        Ok(Self { largos, slimes })
    }
}

/// Read and parse the largo file, sorted for display.
pub fn load_largos(path: &Path) -> Result<Vec<Largo>, CatalogError> {
    let mut largos: Vec<Largo> = read_json(path)?;
    sort_largos(&mut largos);
    Ok(largos)
}

/// Read and parse the slime file.
pub fn load_slimes(path: &Path) -> Result<Vec<Slime>, CatalogError> {
    read_json(path)
}

/// Stable sort on the primary slime type.
fn sort_largos(largos: &mut [Largo]) {
    largos.sort_by(|a, b| a.primary().cmp(b.primary()));
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    tracing::debug!(path = %path.display(), "reading catalog file");
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

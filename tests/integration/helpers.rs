//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use largo_curator::{Catalog, CuratorState};
use tempfile::TempDir;

/// Directory holding the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Load the fixture catalog.
pub fn load_fixture_catalog() -> Catalog {
    let dir = fixtures_dir();
    Catalog::load(&dir.join("largos.json"), &dir.join("slimes.json"))
        .expect("fixture catalog should load")
}

/// Fresh state over the fixture catalog.
pub fn fixture_state() -> CuratorState {
    CuratorState::new(load_fixture_catalog())
}

/// Lay out a temp directory the way the binary expects by default:
/// `<tmp>/slimes.json` and `<tmp>/work/largos.json`.
///
/// Returns the temp dir and the `work` directory to run in.
pub fn temp_workspace(largos: Option<&str>, slimes: Option<&str>) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let work = temp.path().join("work");
    fs::create_dir(&work).expect("Failed to create work dir");
    if let Some(content) = largos {
        fs::write(work.join("largos.json"), content).expect("Failed to write largos");
    }
    if let Some(content) = slimes {
        fs::write(temp.path().join("slimes.json"), content).expect("Failed to write slimes");
    }
    (temp, work)
}

/// Names of the visible largos, in display order.
pub fn visible_names(state: &CuratorState) -> Vec<String> {
    state.filtered_largos().map(|l| l.name.clone()).collect()
}

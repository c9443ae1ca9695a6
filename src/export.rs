//! Culture export.
//!
//! Writes the selected largos followed by every slime the selection does not
//! cover, one name per line.

use std::fs;
use std::path::{Path, PathBuf};

use crate::curator::CuratorState;

/// Errors raised while writing the culture file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write culture list to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lines of the culture list.
///
/// Selected largos in filtered-view order, then `<type> Slime` for each
/// uncovered slime.
pub fn build_culture(state: &CuratorState) -> Vec<String> {
    let largos = state
        .filtered_largos()
        .filter(|largo| largo.selected)
        .map(|largo| largo.name.clone());
    let slimes = state
        .slimes()
        .iter()
        .filter(|slime| !slime.selected)
        .map(|slime| format!("{} Slime", slime.name));
    largos.chain(slimes).collect()
}

/// Join lines, each terminated by a newline.
pub fn render_culture(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Write the culture list to `path`, replacing any previous export.
///
/// # Returns
/// The number of lines written
pub fn write_culture(state: &CuratorState, path: &Path) -> Result<usize, ExportError> {
    let lines = build_culture(state);
    fs::write(path, render_culture(&lines)).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), lines = lines.len(), "exported culture");
    Ok(lines.len())
}

/// Status message shown after a successful export.
pub fn success_message(count: usize) -> String {
    format!("Successfully exported {} cultures!", count)
}

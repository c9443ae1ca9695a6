//! Input handling for the curator.
//!
//! This module decodes raw keyboard bytes into commands and applies them to
//! the curator state, returning control flow signals to the session loop.

mod keyboard;

pub use keyboard::{decode_keys, Command};

use std::path::Path;

use crate::curator::{CuratorState, InputResult};
use crate::export::{write_culture, ExportError};

/// Apply one command to the state.
///
/// # Arguments
/// * `command` - The decoded command
/// * `state` - Mutable reference to the curator state
/// * `culture_path` - Where `Export` writes the culture list
///
/// # Returns
/// `InputResult` telling the loop whether to redraw, report an export or quit.
/// A failed export is returned as an error and ends the session.
pub fn dispatch(
    command: Command,
    state: &mut CuratorState,
    culture_path: &Path,
) -> Result<InputResult, ExportError> {
    let result = match command {
        Command::Quit => InputResult::Quit,
        Command::Toggle => changed(state.toggle()),
        Command::Move(direction) => changed(state.move_cursor(direction)),
        Command::Export => InputResult::Exported(write_culture(state, culture_path)?),
    };
    Ok(result)
}

fn changed(redraw: bool) -> InputResult {
    if redraw {
        InputResult::Redraw
    } else {
        InputResult::Continue
    }
}

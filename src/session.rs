//! Interactive curation session.
//!
//! Puts the terminal in raw mode, draws the first frame and then reacts to
//! keyboard input until Ctrl+C, end of input, or a fatal export error.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::terminal;

use crate::curator::{CuratorState, InputResult};
use crate::export::success_message;
use crate::input::{decode_keys, dispatch};
use crate::render::Renderer;

/// Terminal width used when the size cannot be queried.
const FALLBACK_WIDTH: usize = 80;

/// Keeps the terminal in raw mode for its lifetime.
///
/// Raw mode is released on drop, including on early returns and panics.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enable raw mode (no line buffering, no echo).
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Current terminal width in columns.
#[cfg(not(tarpaulin_include))]
pub fn terminal_width() -> usize {
    match terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => FALLBACK_WIDTH,
    }
}

/// Write a full frame for the current state.
pub fn draw<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    state: &CuratorState,
    width: usize,
) -> io::Result<()> {
    out.write_all(renderer.render_frame(state, width).as_bytes())?;
    out.flush()
}

/// Apply one chunk of raw input to the state, writing any output to `out`.
///
/// # Returns
/// `InputResult::Quit` as soon as a quit command is seen, otherwise
/// `InputResult::Continue`. Commands after a quit in the same chunk are
/// not applied.
pub fn handle_chunk<W: Write>(
    chunk: &[u8],
    state: &mut CuratorState,
    renderer: &Renderer,
    culture_path: &Path,
    width: usize,
    out: &mut W,
) -> Result<InputResult> {
    for command in decode_keys(chunk) {
        match dispatch(command, state, culture_path)? {
            InputResult::Quit => {
                tracing::info!("quit requested");
                return Ok(InputResult::Quit);
            }
            InputResult::Redraw => draw(out, renderer, state, width)?,
            InputResult::Exported(count) => {
                write!(out, "{}\r\n", success_message(count))?;
                out.flush()?;
            }
            InputResult::Continue => {}
        }
    }
    Ok(InputResult::Continue)
}

/// Run the interactive session until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_session(mut state: CuratorState, renderer: &Renderer, culture_path: &Path) -> Result<()> {
    let _guard = TerminalGuard::new().context("Failed to enable raw terminal mode")?;
    let mut stdout = io::stdout();
    let mut stdin = io::stdin().lock();

    draw(&mut stdout, renderer, &state, terminal_width())?;

    let mut buf = [0u8; 64];
    loop {
        let n = match stdin.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("Failed to read keyboard input"),
        };

        let result = handle_chunk(
            &buf[..n],
            &mut state,
            renderer,
            culture_path,
            terminal_width(),
            &mut stdout,
        )?;
        if result == InputResult::Quit {
            break;
        }
    }

    tracing::info!("session ended");
    Ok(())
}

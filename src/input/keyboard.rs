//! Keyboard input decoding.
//!
//! Raw stdin chunks are fed through a `vte` parser, which separates control
//! bytes, printable characters and CSI sequences. Only the handful of keys
//! the curator understands become commands; everything else is dropped.

use vte::{Params, Parser, Perform};

use crate::curator::Direction;

/// A decoded key command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Ctrl+C (0x03)
    Quit,
    /// Space
    Toggle,
    /// `E` or `e`
    Export,
    /// Arrow up or down (`ESC [ A` / `ESC [ B`)
    Move(Direction),
}

/// Ctrl+C in raw mode.
const INTERRUPT: u8 = 0x03;

/// Collects commands while the parser walks a chunk.
#[derive(Debug, Default)]
struct KeyCollector {
    commands: Vec<Command>,
}

impl Perform for KeyCollector {
    fn print(&mut self, c: char) {
        match c {
            ' ' => self.commands.push(Command::Toggle),
            'E' | 'e' => self.commands.push(Command::Export),
            _ => tracing::trace!(?c, "ignored key"),
        }
    }

    fn execute(&mut self, byte: u8) {
        if byte == INTERRUPT {
            self.commands.push(Command::Quit);
        } else {
            tracing::trace!(byte, "ignored control byte");
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        // A bare `ESC [ A` arrives with a single zero parameter
        let has_params = params.iter().flatten().any(|&value| value != 0);
        if ignore || !intermediates.is_empty() || has_params {
            return;
        }
        match action {
            'A' => self.commands.push(Command::Move(Direction::Up)),
            'B' => self.commands.push(Command::Move(Direction::Down)),
            _ => tracing::trace!(?action, "ignored csi sequence"),
        }
    }
}

/// Decode one chunk of raw input into commands, in input order.
///
/// Each chunk is parsed on its own: an escape sequence cut off at the end of
/// a chunk is dropped rather than carried into the next read.
pub fn decode_keys(bytes: &[u8]) -> Vec<Command> {
    let mut parser = Parser::new();
    let mut collector = KeyCollector::default();
    parser.advance(&mut collector, bytes);
    collector.commands
}

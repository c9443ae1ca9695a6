//! Rendering components for the curator screen.
//!
//! Every redraw produces a complete frame as a `String`: clear screen,
//! home the cursor, the largo rows, then the slime grid. There is no
//! partial update, so the same state always yields the same frame.

mod ansi;
mod grid;
mod rows;

use regex::{Regex, RegexBuilder};
use unicode_width::UnicodeWidthStr;

use crate::config::LayoutConfig;
use crate::curator::CuratorState;
use crate::theme::Theme;

pub use ansi::{color_to_ansi_bg, color_to_ansi_fg, paint, CLEAR_SCREEN, CURSOR_HOME, RESET};
pub use grid::{cell_width, render_slime_grid};
pub use rows::{format_row, ordinal, render_rows, row_style};

/// Pad `text` with spaces up to `width` display columns.
///
/// Text that is already wider is returned unchanged.
pub fn pad_end(text: &str, width: usize) -> String {
    let visible = text.width();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(visible));
    out.push_str(text);
    for _ in visible..width {
        out.push(' ');
    }
    out
}

/// Projects a `CuratorState` onto the terminal.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    layout: LayoutConfig,
    muted: Option<Regex>,
}

impl Renderer {
    /// Create a renderer, compiling the muted-name pattern (case-insensitive).
    ///
    /// An empty pattern mutes nothing.
    pub fn new(theme: Theme, layout: LayoutConfig) -> Result<Self, regex::Error> {
        let muted = if layout.muted_pattern.is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&layout.muted_pattern)
                    .case_insensitive(true)
                    .build()?,
            )
        };
        Ok(Self {
            theme,
            layout,
            muted,
        })
    }

    /// Build the full frame for a terminal `width` columns wide.
    pub fn render_frame(&self, state: &CuratorState, width: usize) -> String {
        let mut frame = String::with_capacity((state.len() + state.slimes().len()) * (width + 32));
        frame.push_str(CLEAR_SCREEN);
        frame.push_str(CURSOR_HOME);

        render_rows(
            state,
            &self.theme,
            &self.layout,
            self.muted.as_ref(),
            width,
            &mut frame,
        );
        render_slime_grid(
            state.slimes(),
            self.layout.grid_columns,
            width,
            &self.theme,
            &mut frame,
        );
        frame
    }
}

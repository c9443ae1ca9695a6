//! Slime grid rendering.
//!
//! Lists every slime in fixed-width columns below the largo rows, with the
//! slimes covered by the current selection highlighted.

use crate::catalog::Slime;
use crate::render::ansi::paint;
use crate::render::pad_end;
use crate::theme::Theme;

/// Width of one grid cell.
pub fn cell_width(width: usize, columns: usize) -> usize {
    width / columns.max(1)
}

/// Append the slime grid to `buf`, one `\r\n`-terminated line per grid row.
pub fn render_slime_grid(
    slimes: &[Slime],
    columns: usize,
    width: usize,
    theme: &Theme,
    buf: &mut String,
) {
    let cell = cell_width(width, columns);

    for row in slimes.chunks(columns.max(1)) {
        for slime in row {
            let text = pad_end(&slime.name, cell);
            if slime.selected {
                paint(theme.slime_covered, &text, buf);
            } else {
                buf.push_str(&text);
            }
        }
        buf.push_str("\r\n");
    }
}

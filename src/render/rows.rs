//! Largo row rendering.
//!
//! One line per visible largo. The cursor, selection and group band are
//! folded into a single color choice per line.

use regex::Regex;

use crate::catalog::Largo;
use crate::config::LayoutConfig;
use crate::curator::CuratorState;
use crate::render::ansi::paint;
use crate::render::pad_end;
use crate::theme::{RowStyle, Theme};

/// Ordinal column: `#` plus the 1-based index right-aligned to two digits,
/// or the same number of `>` on the cursor row.
pub fn ordinal(idx: usize, is_cursor: bool) -> String {
    let ordinal = format!("#{:>2}", idx + 1);
    if is_cursor {
        ">".repeat(ordinal.chars().count())
    } else {
        ordinal
    }
}

/// Plain text of one largo row, padded to the terminal width.
pub fn format_row(
    largo: &Largo,
    idx: usize,
    is_cursor: bool,
    layout: &LayoutConfig,
    width: usize,
) -> String {
    let mut line = ordinal(idx, is_cursor);
    line.push(':');
    line.push_str(&pad_end(&largo.name, layout.name_width));
    line.push_str(&pad_end(&largo.slime_types[0], layout.slime_width));
    line.push_str(&pad_end(&largo.slime_types[1], layout.slime_width));
    line.push_str(&pad_end(largo.food.label(), layout.food_width));
    if largo.food.has_crop {
        line.push_str("Has fav food");
    }
    pad_end(&line, width)
}

/// Pick the colors for a row.
///
/// Precedence: cursor on a selected largo, cursor, selected, group band.
/// Muted largos always get the muted foreground.
pub fn row_style(
    largo: &Largo,
    is_cursor: bool,
    group: usize,
    muted: Option<&Regex>,
    theme: &Theme,
) -> RowStyle {
    let mut style = match (is_cursor, largo.selected) {
        (true, true) => theme.cursor_selected,
        (true, false) => theme.cursor,
        (false, true) => theme.selected,
        (false, false) => RowStyle::new(theme.text_primary, theme.band(group)),
    };
    if muted.is_some_and(|re| re.is_match(&largo.name)) {
        style.fg = theme.text_muted;
    }
    style
}

/// Append all visible largo rows to `buf`.
pub fn render_rows(
    state: &CuratorState,
    theme: &Theme,
    layout: &LayoutConfig,
    muted: Option<&Regex>,
    width: usize,
    buf: &mut String,
) {
    let largos: Vec<&Largo> = state.filtered_largos().collect();
    let mut group = 0usize;

    for (idx, largo) in largos.iter().enumerate() {
        let is_cursor = idx == state.selection();
        let line = format_row(largo, idx, is_cursor, layout, width);
        paint(row_style(largo, is_cursor, group, muted, theme), &line, buf);
        buf.push_str("\r\n");

        if let Some(next) = largos.get(idx + 1) {
            if next.primary() != largo.primary() {
                group += layout.group_step;
            }
        }
    }
}

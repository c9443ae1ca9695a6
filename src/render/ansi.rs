//! ANSI escape code conversion utilities.
//!
//! Converts theme colors to ANSI escape sequences for rendering.

use ratatui::style::Color;

use crate::theme::RowStyle;

/// Clear the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";
/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[;H";
/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Append the foreground escape code for a color.
///
/// # Returns
/// `true` if a code was appended, `false` if the color is the default
pub fn color_to_ansi_fg(color: Color, buf: &mut String) -> bool {
    match color {
        Color::Reset => false,
        Color::Indexed(n) => {
            buf.push_str("\x1b[38;5;");
            buf.push_str(&n.to_string());
            buf.push('m');
            true
        }
        Color::Rgb(r, g, b) => {
            buf.push_str(&format!("\x1b[38;2;{};{};{}m", r, g, b));
            true
        }
        named => {
            buf.push_str(&format!("\x1b[{}m", named_code(named)));
            true
        }
    }
}

/// Append the background escape code for a color.
///
/// # Returns
/// `true` if a code was appended, `false` if the color is the default
pub fn color_to_ansi_bg(color: Color, buf: &mut String) -> bool {
    match color {
        Color::Reset => false,
        Color::Indexed(n) => {
            buf.push_str("\x1b[48;5;");
            buf.push_str(&n.to_string());
            buf.push('m');
            true
        }
        Color::Rgb(r, g, b) => {
            buf.push_str(&format!("\x1b[48;2;{};{};{}m", r, g, b));
            true
        }
        named => {
            buf.push_str(&format!("\x1b[{}m", named_code(named) + 10));
            true
        }
    }
}

/// Append `text` wrapped in the given style and a trailing reset.
pub fn paint(style: RowStyle, text: &str, buf: &mut String) {
    let fg = color_to_ansi_fg(style.fg, buf);
    let bg = color_to_ansi_bg(style.bg, buf);
    buf.push_str(text);
    if fg || bg {
        buf.push_str(RESET);
    }
}

/// SGR foreground code of a named color; background is this plus 10.
fn named_code(color: Color) -> u8 {
    match color {
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::LightRed => 91,
        Color::LightGreen => 92,
        Color::LightYellow => 93,
        Color::LightBlue => 94,
        Color::LightMagenta => 95,
        Color::LightCyan => 96,
        Color::White => 97,
        // Reset, Indexed and Rgb are handled by the callers
        _ => 39,
    }
}

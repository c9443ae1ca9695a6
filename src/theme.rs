//! Theme configuration for the curator screen
//!
//! Centralizes the colors used for the largo rows and the slime grid.
//! Colors are ratatui colors; the renderer converts them to ANSI codes.

use ratatui::style::Color;

use crate::render::{color_to_ansi_fg, RESET};

/// Foreground and background pair for one row or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub fg: Color,
    pub bg: Color,
}

impl RowStyle {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// Theme configuration for the curator.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Cursor row whose largo is selected
    pub cursor_selected: RowStyle,
    /// Cursor row
    pub cursor: RowStyle,
    /// Selected largo row
    pub selected: RowStyle,
    /// Foreground on group bands
    pub text_primary: Color,
    /// Foreground for muted largos, on any background
    pub text_muted: Color,
    /// Band saturation in percent
    pub band_saturation: f64,
    /// Band lightness in percent
    pub band_lightness: f64,
    /// Covered slime cell in the grid
    pub slime_covered: RowStyle,
    /// Start-up progress messages printed before the screen takes over
    pub text_status: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::bands()
    }
}

impl Theme {
    /// Bright cyan cursor, bright blue selection, dark hue bands per group.
    pub fn bands() -> Self {
        Self {
            cursor_selected: RowStyle::new(Color::Blue, Color::LightCyan),
            cursor: RowStyle::new(Color::Black, Color::LightCyan),
            selected: RowStyle::new(Color::Black, Color::LightBlue),
            text_primary: Color::White,
            text_muted: Color::DarkGray,
            band_saturation: 100.0,
            band_lightness: 15.0,
            slime_covered: RowStyle::new(Color::Black, Color::LightGreen),
            text_status: Color::Gray,
        }
    }

    /// Format text with the status color (for plain CLI output).
    pub fn status_text(&self, text: &str) -> String {
        let mut out = String::new();
        if color_to_ansi_fg(self.text_status, &mut out) {
            out.push_str(text);
            out.push_str(RESET);
        } else {
            out.push_str(text);
        }
        out
    }

    /// Background for an unselected row in the given group.
    ///
    /// The group counter is used as a hue in degrees, wrapped at 256.
    pub fn band(&self, group: usize) -> Color {
        let (r, g, b) = hsl_to_rgb(
            (group % 256) as f64,
            self.band_saturation,
            self.band_lightness,
        );
        Color::Rgb(r, g, b)
    }
}

/// Convert HSL (hue in degrees, saturation and lightness in percent) to RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}

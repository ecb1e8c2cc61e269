//! UI theme.

use ratatui::style::Color;

use crate::infrastructure::config::ThemeConfig;

/// Resolved UI theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color used for borders and highlights.
    pub accent: Color,
}

impl Theme {
    /// Resolves the theme from configuration, falling back to the default
    /// accent when the configured color cannot be parsed.
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: parse_color(&config.accent_color).unwrap_or(Color::Cyan),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
        }
    }
}

/// Parses a color name or a "#rrggbb" hex code.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}

//! Theme management and ANSI escape sequence generation.
//!
//! Two Catppuccin flavours ship with the plugin; custom themes can be loaded
//! from TOML files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-latte`: light
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! subtitle_fg = "#a6adc8"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#89b4fa"
//! button_fg = "#1e1e2e"
//! button_bg = "#89b4fa"
//! button_disabled_fg = "#6c7086"
//! error_fg = "#f38ba8"
//! notice_fg = "#94e2d5"
//! card_title_fg = "#f9e2af"
//! card_meta_fg = "#a6adc8"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::{Result, ShelfscoutError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title color.
    pub header_fg: String,
    /// Optional title background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,
    /// Subtitle color.
    pub subtitle_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text (placeholder, footer).
    pub text_dim: String,
    /// Separator lines.
    pub border: String,

    /// Query box frame.
    pub search_bar_border: String,
    /// Enabled button label.
    pub button_fg: String,
    /// Enabled button background.
    pub button_bg: String,
    /// Disabled button label.
    pub button_disabled_fg: String,

    /// Error banner.
    pub error_fg: String,
    /// Response notices.
    pub notice_fg: String,

    /// Candidate title.
    pub card_title_fg: String,
    /// Candidate author, year and explanation.
    pub card_meta_fg: String,

    /// Empty results message.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is unknown.
    ///
    /// ```rust
    /// use shelfscout::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`ShelfscoutError::Io`] if the file cannot be read
    /// - [`ShelfscoutError::Theme`] if the TOML is invalid or incomplete
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ShelfscoutError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset; clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn fg_and_bg_encode_rgb() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zzzzzz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), theme);
    }

    #[test]
    fn incomplete_theme_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ShelfscoutError::Theme(_)));
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let err = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ShelfscoutError::Io(_)));
    }
}

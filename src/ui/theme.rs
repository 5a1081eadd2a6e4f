//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the terminal presentation,
//! supporting the two built-in themes (dark and light, dark being the
//! default) and custom themes loaded from TOML files. It provides utilities
//! for converting hex colors to ANSI escape sequences.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! heading_fg = "#eeeeee"
//! code_fg = "#5fd7d7"
//! text_normal = "#cccccc"
//! text_dim = "#666666"
//! error_fg = "#ff6b6b"
//! success_fg = "#00e5ff"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{FolioError, Result};

/// Color scheme configuration for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all rendered elements.
    pub colors: ThemeColors,
}

/// Color definitions for all rendered elements.
///
/// All colors are specified as hex strings (e.g., "#eeeeee").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Revealed heading characters.
    pub heading_fg: String,
    /// Unresolved placeholder glyphs. Rendered dimmed on top of this color,
    /// matching the reduced-opacity styling of the source design.
    pub code_fg: String,
    /// Normal body text.
    pub text_normal: String,
    /// Secondary text (hints, timestamps).
    pub text_dim: String,
    /// Submission error messages.
    pub error_fg: String,
    /// Completion banner.
    pub success_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`dark` or `light`).
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dark" => include_str!("../../themes/dark.toml"),
            "light" => include_str!("../../themes/light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Io`] if the file cannot be read and
    /// [`FolioError::Theme`] if the TOML content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| FolioError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present and falls back to white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (dark).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("dark").expect("built-in dark theme should always parse")
    }
}

//! Board colour scheme
//!
//! Two hex colours drive the whole board: tiles alternate between them and
//! every coordinate label takes the colour of the *other* tile shade so it
//! contrasts with the tile under it.

use bevy::color::Srgba;
use tracing::{error, warn};

pub const DEFAULT_LIGHT_HEX: &str = "#ffcf9f";
pub const DEFAULT_DARK_HEX: &str = "#d28c45";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardColors {
    pub light: Srgba,
    pub dark: Srgba,
}

impl Default for BoardColors {
    fn default() -> Self {
        Self {
            light: Srgba::rgb_u8(0xff, 0xcf, 0x9f),
            dark: Srgba::rgb_u8(0xd2, 0x8c, 0x45),
        }
    }
}

impl BoardColors {
    /// Parses both colours, falling back to the defaults per colour
    pub fn from_hex(light: &str, dark: &str) -> Self {
        let defaults = BoardColors::default();
        Self {
            light: safe_parse_hex_color(light, defaults.light, "light squares"),
            dark: safe_parse_hex_color(dark, defaults.dark, "dark squares"),
        }
    }

    /// Tile colour at display `(row, col)`: light when `row + col` is even
    pub fn tile(&self, row: u8, col: u8) -> Srgba {
        if (row + col).is_multiple_of(2) {
            self.light
        } else {
            self.dark
        }
    }

    /// Label colour for text drawn on the tile at `(row, col)`
    pub fn label(&self, row: u8, col: u8) -> Srgba {
        if (row + col).is_multiple_of(2) {
            self.dark
        } else {
            self.light
        }
    }
}

/// Parses a hex colour string, logging and returning `fallback` on failure
pub fn safe_parse_hex_color(hex: &str, fallback: Srgba, context: &str) -> Srgba {
    match Srgba::hex(hex) {
        Ok(color) => color,
        Err(e) => {
            error!(
                "[BOARD_THEME] Failed to parse hex color '{}' for {}: {:?}",
                hex, context, e
            );
            warn!("[BOARD_THEME] Using fallback color: {}", fallback.to_hex());
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hex_matches_default_colors() {
        let parsed = BoardColors::from_hex(DEFAULT_LIGHT_HEX, DEFAULT_DARK_HEX);
        assert_eq!(parsed, BoardColors::default());
    }

    #[test]
    fn test_invalid_hex_falls_back() {
        let parsed = BoardColors::from_hex("not-a-color", "#000000");
        assert_eq!(parsed.light, BoardColors::default().light);
        assert_eq!(parsed.dark, Srgba::rgb_u8(0, 0, 0));
    }

    #[test]
    fn test_tiles_alternate_and_labels_contrast() {
        let colors = BoardColors::default();
        assert_eq!(colors.tile(0, 0), colors.light);
        assert_eq!(colors.tile(0, 1), colors.dark);
        assert_eq!(colors.tile(7, 7), colors.light);
        for row in 0..8 {
            for col in 0..8 {
                assert_ne!(colors.tile(row, col), colors.label(row, col));
            }
        }
    }
}

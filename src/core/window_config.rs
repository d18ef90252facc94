//! Window configuration
//!
//! The primary window is exactly the size of the board and not resizable, so
//! canvas pixels and window pixels line up one to one.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

pub const WINDOW_TITLE: &str = "ChessDesk";

/// Configuration for the primary application window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// Width in physical pixels
    pub width: u32,
    /// Height in physical pixels
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::for_board(480)
    }
}

impl WindowConfig {
    /// Square window fitting a board of `board_px` pixels
    pub fn for_board(board_px: u32) -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: board_px,
            height: board_px,
            resizable: false,
        }
    }

    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height)
                .with_scale_factor_override(1.0),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_matches_board() {
        let window = WindowConfig::for_board(8 * 60).to_window();
        assert_eq!(window.width(), 480.0);
        assert_eq!(window.height(), 480.0);
        assert!(!window.resizable);
        assert_eq!(window.title, WINDOW_TITLE);
    }
}

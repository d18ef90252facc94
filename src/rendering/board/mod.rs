//! Board rendering module
//!
//! Manages the board view, its colour scheme and orientation.

pub mod board_theme;
pub mod orientation;
pub mod view;

pub use board_theme::BoardColors;
pub use orientation::{Labels, Orientation};
pub use view::{BoardView, Redraw};

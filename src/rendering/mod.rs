//! Rendering module - 2D board drawn from a retained canvas
//!
//! Rendering is split in two halves so the board can be drawn and inspected
//! without a window:
//!
//! - `canvas` - ordered display list of rectangles, text and sprites with
//!   ids and layer tags
//! - `board` - [`BoardView`], which draws a game state onto the canvas and
//!   can rasterize it to an image
//! - `sync` - mirrors the canvas into Bevy sprites and text
//! - `plugin` - [`BoardViewPlugin`], input and window glue
//!
//! # Bevy Rendering
//!
//! Uses Bevy's 2D pipeline only: `Camera2d`, `Sprite` (solid colour tiles and
//! piece textures) and `Text2d` (coordinate labels).

pub mod board;
pub mod canvas;
pub mod error;
pub mod plugin;
pub mod sync;

pub use board::{BoardColors, BoardView, Orientation, Redraw};
pub use canvas::{Canvas, CanvasItem, Layer, Shape, TextAnchor};
pub use error::{ViewError, ViewResult};
pub use plugin::{BoardViewPlugin, SavesLocation};
pub use sync::{ActiveBoard, CanvasItemId, PieceTextures};

//! Board view - renders a [`GameState`] onto a [`Canvas`]
//!
//! The view owns the sprite cache, the colour scheme, the orientation and the
//! canvas. It never decides chess legality itself: moves are handed to the
//! game state, and only when that succeeds are the pieces redrawn.
//!
//! # Layers
//!
//! | Layer   | Drawn by                 | Cleared by                    |
//! |---------|--------------------------|-------------------------------|
//! | `Tile`  | [`BoardView::render`]    | `render`                      |
//! | `Label` | [`BoardView::render`]    | `render`                      |
//! | `Piece` | `render`, `refresh_pieces` | `render`, `refresh_pieces`  |
//!
//! # Coordinates
//!
//! Canvas pixels, origin at the top-left corner of the a8 tile (h1 when
//! flipped), y growing downwards.

use std::path::Path;

use bevy::color::{ColorToPacked, Srgba};
use image::{imageops, Rgba, RgbaImage};
use tracing::{debug, info};

use super::board_theme::BoardColors;
use super::orientation::{Labels, Orientation};
use crate::assets::AssetStore;
use crate::core::BoardSettings;
use crate::game::chess_game::ChessGame;
use crate::game::state::GameState;
use crate::game::types::{PieceCode, PieceColor, Square};
use crate::rendering::canvas::{Canvas, Layer, Shape, TextAnchor};
use crate::rendering::error::ViewResult;

/// Label text size in pixels, 8pt at 96 dpi
pub const LABEL_FONT_SIZE: f32 = 11.0;

/// What to redraw after a flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Redraw {
    /// Leave the canvas as it is
    #[default]
    None,
    /// Redraw the piece layer only
    Pieces,
    /// Clear and redraw everything
    Full,
}

pub struct BoardView<G: GameState = ChessGame> {
    game: G,
    assets: AssetStore,
    colors: BoardColors,
    orientation: Orientation,
    labels: Labels,
    canvas: Canvas,
}

impl<G: GameState> BoardView<G> {
    /// Loads every piece sprite from `asset_dir` at `tile_size` pixels
    ///
    /// # Errors
    ///
    /// Fails with [`crate::assets::AssetError`] when the directory is missing
    /// or any of the twelve sprites cannot be decoded.
    pub fn new(
        game: G,
        asset_dir: impl AsRef<Path>,
        tile_size: u32,
        start_flipped: bool,
    ) -> ViewResult<Self> {
        Self::with_colors(
            game,
            asset_dir,
            tile_size,
            start_flipped,
            BoardColors::default(),
        )
    }

    pub fn with_colors(
        game: G,
        asset_dir: impl AsRef<Path>,
        tile_size: u32,
        start_flipped: bool,
        colors: BoardColors,
    ) -> ViewResult<Self> {
        let assets = AssetStore::load(asset_dir, tile_size)?;
        Ok(Self::from_assets(game, assets, start_flipped, colors))
    }

    pub fn from_settings(game: G, settings: &BoardSettings) -> ViewResult<Self> {
        settings.validate()?;
        Self::with_colors(
            game,
            &settings.asset_dir,
            settings.tile_size,
            settings.start_flipped,
            BoardColors::from_hex(&settings.light_hex, &settings.dark_hex),
        )
    }

    /// Builds a view over an already loaded sprite cache
    pub fn from_assets(game: G, assets: AssetStore, start_flipped: bool, colors: BoardColors) -> Self {
        let orientation = Orientation::from_flipped(start_flipped);
        let side = (assets.tile_size() * 8) as f32;
        Self {
            game,
            assets,
            colors,
            orientation,
            labels: Labels::for_orientation(orientation),
            canvas: Canvas::new(side, side),
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.assets.tile_size()
    }

    /// Width and height of the whole board in pixels
    pub fn board_size_px(&self) -> u32 {
        self.tile_size() * 8
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn colors(&self) -> BoardColors {
        self.colors
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Read-only access to the authoritative game state
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Clears the canvas and draws tiles, labels and pieces
    pub fn render(&mut self) -> ViewResult<()> {
        self.canvas.delete_all();
        let tile = self.tile_size() as f32;

        for row in 0..8u8 {
            for col in 0..8u8 {
                let (x1, y1) = (col as f32 * tile, row as f32 * tile);
                self.canvas
                    .create_rect(x1, y1, x1 + tile, y1 + tile, self.colors.tile(row, col));
            }
        }

        for col in 0..8u8 {
            let (x1, y1) = (col as f32 * tile, 7.0 * tile);
            self.canvas.create_text(
                x1 + tile - 1.0,
                y1 + tile - 1.0,
                self.labels.files[col as usize].to_string(),
                TextAnchor::SouthEast,
                LABEL_FONT_SIZE,
                self.colors.label(7, col),
            );
        }
        for row in 0..8u8 {
            let y1 = row as f32 * tile;
            self.canvas.create_text(
                3.0,
                y1 + 3.0,
                self.labels.ranks[row as usize].to_string(),
                TextAnchor::NorthWest,
                LABEL_FONT_SIZE,
                self.colors.label(row, 0),
            );
        }

        self.draw_pieces()?;
        debug!(
            "[BOARD] Rendered {} items ({:?})",
            self.canvas.len(),
            self.orientation
        );
        Ok(())
    }

    /// Replaces the piece layer, leaving tiles and labels untouched
    pub fn refresh_pieces(&mut self) -> ViewResult<()> {
        self.canvas.delete_tag(Layer::Piece);
        self.draw_pieces()
    }

    fn draw_pieces(&mut self) -> ViewResult<()> {
        let tile = self.tile_size() as f32;
        for row in 0..8u8 {
            for col in 0..8u8 {
                let square = self.orientation.square_at(row, col);
                let Some(code) = self.game.piece_at(square) else {
                    continue;
                };
                self.assets.sprite(code)?;
                self.canvas.create_image(
                    (col as f32 + 0.5) * tile,
                    (row as f32 + 0.5) * tile,
                    code,
                    square,
                );
            }
        }
        Ok(())
    }

    /// Toggles the orientation and label order, then redraws as requested
    pub fn flip(&mut self, redraw: Redraw) -> ViewResult<()> {
        self.orientation = self.orientation.toggled();
        self.labels.reverse();
        info!("[BOARD] Orientation now {:?}", self.orientation);
        match redraw {
            Redraw::None => Ok(()),
            Redraw::Pieces => self.refresh_pieces(),
            Redraw::Full => self.render(),
        }
    }

    /// Plays a long-algebraic move such as `e2e4` or `e7e8q`
    ///
    /// On failure the game state and the canvas are left as they were.
    pub fn apply_move(&mut self, move_text: &str) -> ViewResult<()> {
        self.game.play_uci(move_text)?;
        info!("[BOARD] Played {}", move_text.trim());
        self.refresh_pieces()
    }

    pub fn is_check(&self) -> bool {
        self.game.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.game.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.game.is_stalemate()
    }

    pub fn is_draw(&self) -> bool {
        self.game.is_draw()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn current_fen(&self) -> String {
        self.game.fen()
    }

    pub fn turn_owner(&self) -> PieceColor {
        self.game.turn()
    }

    pub fn piece_at(&self, square: Square) -> Option<PieceCode> {
        self.game.piece_at(square)
    }

    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        self.game.legal_targets(from)
    }

    /// Square under canvas pixel `(x, y)`, if it lies on the board
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        let tile = self.tile_size() as f32;
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (col, row) = ((x / tile) as u32, (y / tile) as u32);
        if col >= 8 || row >= 8 {
            return None;
        }
        Some(self.orientation.square_at(row as u8, col as u8))
    }

    /// Top-left pixel of the tile showing `square`
    pub fn tile_origin(&self, square: Square) -> (f32, f32) {
        let tile = self.tile_size() as f32;
        let (row, col) = self.orientation.display_of(square);
        (col as f32 * tile, row as f32 * tile)
    }

    /// One-line summary for the window title
    pub fn status(&self) -> String {
        if self.game.is_checkmate() {
            format!("Checkmate - {} wins", self.game.turn().opposite())
        } else if self.game.is_stalemate() {
            "Stalemate".to_string()
        } else if self.game.is_draw() {
            "Draw".to_string()
        } else if self.game.is_check() {
            format!("{} to move - check", self.game.turn())
        } else {
            format!("{} to move", self.game.turn())
        }
    }

    /// Rasterizes tiles and pieces; text labels are not drawn
    pub fn snapshot(&self) -> ViewResult<RgbaImage> {
        let side = self.board_size_px();
        let half = self.tile_size() as f32 / 2.0;
        let mut image = RgbaImage::new(side, side);
        for item in self.canvas.items() {
            match &item.shape {
                Shape::Rect { x1, y1, x2, y2, fill } => {
                    let block = RgbaImage::from_pixel(
                        (x2 - x1).round() as u32,
                        (y2 - y1).round() as u32,
                        to_rgba(*fill),
                    );
                    imageops::overlay(&mut image, &block, *x1 as i64, *y1 as i64);
                }
                Shape::Image { x, y, code, .. } => {
                    let sprite = self.assets.sprite(*code)?;
                    imageops::overlay(&mut image, sprite, (x - half) as i64, (y - half) as i64);
                }
                Shape::Text { .. } => {}
            }
        }
        Ok(image)
    }
}

fn to_rgba(color: Srgba) -> Rgba<u8> {
    Rgba(color.to_u8_array())
}

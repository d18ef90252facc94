//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use chessdesk::assets::{AssetStore, PIECES_SUBDIR};
use chessdesk::game::{ChessGame, PieceCode, PieceColor};
use chessdesk::rendering::BoardView;

/// Fresh directory under the system temp dir
pub fn temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{prefix}-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// Sprite colour used for every piece of `color`
pub fn sprite_color(color: PieceColor) -> Rgba<u8> {
    match color {
        PieceColor::White => Rgba([250, 250, 250, 255]),
        PieceColor::Black => Rgba([5, 5, 5, 255]),
    }
}

/// Asset directory with all twelve sprites, optionally leaving one out
pub fn piece_assets(skip: Option<&str>) -> PathBuf {
    let dir = temp_dir("chessdesk-it-assets");
    fs::create_dir_all(dir.join(PIECES_SUBDIR)).expect("create pieces dir");
    for code in PieceCode::all() {
        if Some(code.to_string().as_str()) == skip {
            continue;
        }
        RgbaImage::from_pixel(12, 12, sprite_color(code.color))
            .save(AssetStore::sprite_path(&dir, code))
            .expect("write sprite");
    }
    dir
}

/// Rendered view of the start position at 20px tiles
pub fn rendered_view(flipped: bool) -> (BoardView, PathBuf) {
    let dir = piece_assets(None);
    let mut view = BoardView::new(ChessGame::new(), &dir, 20, flipped).expect("load view");
    view.render().expect("render");
    (view, dir)
}

pub fn cleanup(dir: PathBuf) {
    fs::remove_dir_all(dir).ok();
}

//! PGN game records in the saves folder
//!
//! The setup tool counts `*.pgn` files here and removes anything else, so only
//! PGN files are ever written.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::core::error::CoreResult;
use crate::game::chess_game::{ChessGame, PgnHeaders};

/// Saves folder name, relative to the install root
pub const SAVES_DIR: &str = "saves";

/// Writes `game` as `game-<timestamp>.pgn` under `dir`, creating `dir` if needed
///
/// A numeric suffix is appended when two games finish within the same second.
pub fn save_game_record(dir: &Path, game: &ChessGame) -> CoreResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let stem = format!("game-{}", Local::now().format("%Y%m%d-%H%M%S"));
    let mut path = dir.join(format!("{stem}.pgn"));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{stem}-{n}.pgn"));
        n += 1;
    }
    fs::write(&path, game.to_pgn(&PgnHeaders::default()))?;
    info!("[SAVES] Wrote game record {:?}", path);
    Ok(path)
}

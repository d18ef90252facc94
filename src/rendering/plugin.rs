//! Board view plugin - hosts an [`ActiveBoard`] in a Bevy window
//!
//! The caller builds and renders the [`BoardView`](crate::rendering::BoardView)
//! before the app starts and inserts it as [`ActiveBoard`] together with a
//! [`SavesLocation`]. This plugin then:
//!
//! - uploads the sprite cache as textures on startup
//! - turns clicks into moves through [`Selection`] (`F` flips the board,
//!   `S` writes the current game to the saves folder)
//! - mirrors the canvas into entities after every change
//! - keeps the window title in step with the game status
//! - writes a PGN record when the game ends or the window is closed

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowCloseRequested};

use crate::core::{save_game_record, WINDOW_TITLE};
use crate::input::Selection;
use crate::rendering::board::view::Redraw;
use crate::rendering::sync::{
    sync_canvas_system, upload_piece_textures, ActiveBoard, PieceTextures,
};

/// Folder finished games are written to
#[derive(Resource, Debug, Clone)]
pub struct SavesLocation(pub PathBuf);

/// Number of moves in the last written record, to avoid duplicate files
#[derive(Resource, Debug, Default)]
pub struct SavedRecord {
    pub moves: Option<usize>,
}

pub struct BoardViewPlugin;

impl Plugin for BoardViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PieceTextures>()
            .init_resource::<Selection>()
            .init_resource::<SavedRecord>()
            .add_systems(Startup, (spawn_camera, upload_piece_textures))
            .add_systems(
                Update,
                (
                    board_input_system,
                    save_game_record_system,
                    update_window_title,
                    sync_canvas_system,
                )
                    .chain(),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Board Camera")));
}

/// Click-to-move and keyboard shortcuts
pub fn board_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut board: ResMut<ActiveBoard>,
    mut selection: ResMut<Selection>,
) {
    if keys.just_pressed(KeyCode::KeyF) {
        selection.clear();
        if let Err(e) = board.0.flip(Redraw::Full) {
            error!("[BOARD] Flip failed: {}", e);
        }
    }

    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let board_px = board.0.board_size_px() as f32;
    let x = cursor.x - (window.width() - board_px) / 2.0;
    let y = cursor.y - (window.height() - board_px) / 2.0;
    let Some(square) = board.0.square_at(x, y) else {
        selection.clear();
        return;
    };
    if board.0.is_game_over() {
        return;
    }

    let Some(move_text) = selection.click(square, &board.0) else {
        return;
    };
    match board.0.apply_move(&move_text) {
        Ok(()) => info!("[BOARD] {}", board.0.status()),
        Err(e) => warn!("[BOARD] Move {} rejected: {}", move_text, e),
    }
}

/// Writes a PGN record on game end, on `S`, and when the window closes
pub fn save_game_record_system(
    board: Res<ActiveBoard>,
    keys: Res<ButtonInput<KeyCode>>,
    mut close_requests: MessageReader<WindowCloseRequested>,
    saves: Res<SavesLocation>,
    mut saved: ResMut<SavedRecord>,
) {
    let closing = close_requests.read().count() > 0;
    let requested = keys.just_pressed(KeyCode::KeyS);
    let finished = board.0.is_game_over();
    if !(closing || requested || finished) {
        return;
    }

    let game = board.0.game();
    let moves = game.moves().len();
    if moves == 0 || saved.moves == Some(moves) {
        return;
    }
    match save_game_record(&saves.0, game) {
        Ok(path) => {
            info!("[BOARD] Game saved to {:?}", path);
            saved.moves = Some(moves);
        }
        Err(e) => error!("[BOARD] Failed to save game: {}", e),
    }
}

/// Shows the side to move and check/mate/draw state in the title bar
pub fn update_window_title(
    board: Res<ActiveBoard>,
    mut window: Single<&mut Window, With<PrimaryWindow>>,
) {
    if !board.is_changed() {
        return;
    }
    window.title = format!("{} - {}", WINDOW_TITLE, board.0.status());
}

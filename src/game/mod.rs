//! Chess game logic module
//!
//! Pure game state with no ECS dependencies. The board view only ever talks to
//! the [`GameState`] trait; [`ChessGame`] is the implementation used by the
//! application, backed by `shakmaty`.
//!
//! # Module Organization
//!
//! - `types` - [`PieceColor`], [`PieceKind`], [`PieceCode`], [`Square`]
//! - `state` - the [`GameState`] trait
//! - `chess_game` - [`ChessGame`], draw detection and PGN export
//! - `error` - [`GameError`]

pub mod chess_game;
pub mod error;
pub mod state;
pub mod types;

pub use chess_game::{ChessGame, PgnHeaders};
pub use error::{GameError, GameResult};
pub use state::GameState;
pub use types::{PieceCode, PieceColor, PieceKind, Square};

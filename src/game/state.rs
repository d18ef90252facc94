//! The authoritative-position seam
//!
//! [`GameState`] is everything the board view needs from a rules backend:
//! piece placement for drawing, move validation and commit, and read-only
//! status queries. The view never caches any of these answers.

use super::error::GameResult;
use super::types::{PieceCode, PieceColor, Square};

/// Authoritative chess position consumed by [`crate::rendering::BoardView`]
pub trait GameState {
    /// Piece standing on `square`, if any
    fn piece_at(&self, square: Square) -> Option<PieceCode>;

    /// Side to move
    fn turn(&self) -> PieceColor;

    /// Validates `uci` (long algebraic, e.g. `e2e4`, `e7e8q`) against the legal
    /// move set and commits it. On error the position is unchanged.
    fn play_uci(&mut self, uci: &str) -> GameResult<()>;

    /// Destination squares of every legal move starting on `from`
    fn legal_targets(&self, from: Square) -> Vec<Square>;

    fn is_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_draw(&self) -> bool;
    fn is_game_over(&self) -> bool;

    /// Current position in Forsyth-Edwards Notation
    fn fen(&self) -> String;
}

//! Error types for game module
//!
//! Covers move submission and position setup. Every variant is recoverable:
//! the authoritative position is left untouched when one is returned.

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Move text was malformed or the move is not legal in the current position
    #[error("Illegal move '{text}': {reason}")]
    IllegalMove { text: String, reason: String },

    /// FEN could not be parsed or describes an impossible position
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },

    /// Square notation outside a1..h8
    #[error("Invalid square '{text}'")]
    InvalidSquare { text: String },

    /// Piece code outside the twelve W/B + KQRNBP combinations
    #[error("Invalid piece code '{code}'")]
    InvalidPieceCode { code: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

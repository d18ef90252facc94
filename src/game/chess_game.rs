//! Chess rules resource - shakmaty-backed authoritative position
//!
//! `ChessGame` wraps [`shakmaty::Chess`] and is the single source of truth for
//! whose turn it is, where the pieces stand, and which moves are legal. It also
//! keeps what the rules library does not: the SAN move list for PGN export and
//! the repetition keys needed to detect threefold repetition.
//!
//! # Coordinate System
//!
//! [`Square`] is zero-based (`file 0` = a, `rank 0` = 1) and maps one-to-one
//! onto `shakmaty::Square::from_coords`.

use std::fmt::Write as _;

use shakmaty::fen::{Epd, Fen};
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Rank, Role};

use super::error::{GameError, GameResult};
use super::state::GameState;
use super::types::{PieceCode, PieceColor, PieceKind, Square};

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Seven Tag Roster values for PGN export
#[derive(Debug, Clone)]
pub struct PgnHeaders {
    pub event: String,
    pub site: String,
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
}

impl Default for PgnHeaders {
    fn default() -> Self {
        Self {
            event: "Casual Game".to_string(),
            site: "ChessDesk".to_string(),
            date: chrono::Local::now().format("%Y.%m.%d").to_string(),
            round: "-".to_string(),
            white: "White".to_string(),
            black: "Black".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChessGame {
    position: Chess,
    /// Set only when the game did not start from the standard position
    start_fen: Option<String>,
    start_turn: Color,
    start_fullmove: u32,
    san_moves: Vec<String>,
    /// EPD of every position reached, starting position included
    repetition_keys: Vec<String>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::from_position(Chess::default(), None)
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a game from a FEN string
    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let parsed: Fen = fen.trim().parse().map_err(|e: shakmaty::fen::ParseFenError| {
            GameError::InvalidFen {
                fen: fen.to_string(),
                message: e.to_string(),
            }
        })?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| GameError::InvalidFen {
                fen: fen.to_string(),
                message: e.to_string(),
            })?;
        let start_fen = Fen::from_position(&position, EnPassantMode::Legal).to_string();
        Ok(Self::from_position(position, Some(start_fen)))
    }

    fn from_position(position: Chess, start_fen: Option<String>) -> Self {
        let key = repetition_key(&position);
        Self {
            start_turn: position.turn(),
            start_fullmove: position.fullmoves().get(),
            position,
            start_fen,
            san_moves: Vec::new(),
            repetition_keys: vec![key],
        }
    }

    /// Moves played so far in SAN, with check suffixes
    pub fn moves(&self) -> &[String] {
        &self.san_moves
    }

    /// PGN result token for the current position
    pub fn result_token(&self) -> &'static str {
        if self.position.is_checkmate() {
            match self.position.turn() {
                Color::White => "0-1",
                Color::Black => "1-0",
            }
        } else if self.is_draw() {
            "1/2-1/2"
        } else {
            "*"
        }
    }

    /// Parses long algebraic text into a move legal in the current position
    fn legal_move(&self, uci: &str) -> GameResult<Move> {
        let parsed: UciMove = uci.trim().parse().map_err(|e: shakmaty::uci::ParseUciMoveError| {
            GameError::IllegalMove {
                text: uci.to_string(),
                reason: e.to_string(),
            }
        })?;
        parsed
            .to_move(&self.position)
            .map_err(|_| GameError::IllegalMove {
                text: uci.to_string(),
                reason: "not in the legal move set".to_string(),
            })
    }

    fn repetitions(&self) -> usize {
        match self.repetition_keys.last() {
            Some(current) => self.repetition_keys.iter().filter(|k| *k == current).count(),
            None => 0,
        }
    }

    /// Renders the game as a PGN record
    pub fn to_pgn(&self, headers: &PgnHeaders) -> String {
        let result = self.result_token();
        let mut pgn = String::new();
        let tags = [
            ("Event", headers.event.as_str()),
            ("Site", headers.site.as_str()),
            ("Date", headers.date.as_str()),
            ("Round", headers.round.as_str()),
            ("White", headers.white.as_str()),
            ("Black", headers.black.as_str()),
            ("Result", result),
        ];
        for (name, value) in tags {
            let _ = writeln!(pgn, "[{} \"{}\"]", name, value.replace('"', "'"));
        }
        if let Some(fen) = &self.start_fen {
            let _ = writeln!(pgn, "[SetUp \"1\"]");
            let _ = writeln!(pgn, "[FEN \"{}\"]", fen);
        }
        pgn.push('\n');

        let mut movetext = Vec::with_capacity(self.san_moves.len() + 1);
        let mut fullmove = self.start_fullmove;
        let mut white_to_move = self.start_turn == Color::White;
        for (ply, san) in self.san_moves.iter().enumerate() {
            if white_to_move {
                movetext.push(format!("{}. {}", fullmove, san));
            } else {
                if ply == 0 {
                    movetext.push(format!("{}... {}", fullmove, san));
                } else {
                    movetext.push(san.clone());
                }
                fullmove += 1;
            }
            white_to_move = !white_to_move;
        }
        movetext.push(result.to_string());
        pgn.push_str(&movetext.join(" "));
        pgn.push('\n');
        pgn
    }
}

impl GameState for ChessGame {
    fn piece_at(&self, square: Square) -> Option<PieceCode> {
        self.position
            .board()
            .piece_at(to_shakmaty_square(square))
            .map(|piece| PieceCode::new(color_from_shakmaty(piece.color), kind_from_role(piece.role)))
    }

    fn turn(&self) -> PieceColor {
        color_from_shakmaty(self.position.turn())
    }

    fn play_uci(&mut self, uci: &str) -> GameResult<()> {
        let m = self.legal_move(uci)?;
        let san = SanPlus::from_move_and_play_unchecked(&mut self.position, m);
        self.san_moves.push(san.to_string());
        self.repetition_keys.push(repetition_key(&self.position));
        Ok(())
    }

    fn legal_targets(&self, from: Square) -> Vec<Square> {
        let from = to_shakmaty_square(from);
        let mut targets: Vec<Square> = self
            .position
            .legal_moves()
            .into_iter()
            .filter_map(|m| match UciMove::from_move(m, CastlingMode::Standard) {
                UciMove::Normal { from: f, to, .. } if f == from => Some(from_shakmaty_square(to)),
                _ => None,
            })
            .collect();
        // Promotions list the same target once per piece
        targets.sort_by_key(|s| (s.rank, s.file));
        targets.dedup();
        targets
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES
            || self.repetitions() >= 3
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over() || self.is_draw()
    }

    fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }
}

fn repetition_key(position: &Chess) -> String {
    Epd::from_position(position, EnPassantMode::Legal).to_string()
}

fn to_shakmaty_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(File::new(u32::from(square.file)), Rank::new(u32::from(square.rank)))
}

fn from_shakmaty_square(square: shakmaty::Square) -> Square {
    Square {
        file: u8::from(square.file()),
        rank: u8::from(square.rank()),
    }
}

fn color_from_shakmaty(color: Color) -> PieceColor {
    match color {
        Color::White => PieceColor::White,
        Color::Black => PieceColor::Black,
    }
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::King => PieceKind::King,
        Role::Queen => PieceKind::Queen,
        Role::Rook => PieceKind::Rook,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Pawn => PieceKind::Pawn,
    }
}

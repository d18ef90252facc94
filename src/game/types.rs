//! Board vocabulary shared by the renderer, the asset store and the rules adapter
//!
//! - **Square**: file/rank pair, both zero-based (`file 0` = A, `rank 0` = 1)
//! - **PieceColor** / **PieceKind**: the two halves of a piece identity
//! - **PieceCode**: two-character asset key, e.g. `WK` or `BN`
//!
//! These types carry no dependency on `shakmaty`; conversions live in
//! [`crate::game::chess_game`].

use std::fmt;
use std::str::FromStr;

use super::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    pub fn code(self) -> char {
        match self {
            PieceColor::White => 'W',
            PieceColor::Black => 'B',
        }
    }

    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Knight,
    Bishop,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Pawn,
    ];

    pub fn code(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Pawn => 'P',
        }
    }

    fn from_code(c: char) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|kind| kind.code() == c)
    }
}

/// Compact color+kind key used for asset lookup
///
/// Formats as two uppercase characters (`WK`, `BP`), which is also the file
/// stem of the matching sprite under `assets/pieces/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceCode {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl PieceCode {
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// All twelve codes, white pieces first
    pub fn all() -> impl Iterator<Item = PieceCode> {
        PieceColor::ALL.into_iter().flat_map(|color| {
            PieceKind::ALL
                .into_iter()
                .map(move |kind| PieceCode::new(color, kind))
        })
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self)
    }
}

impl fmt::Display for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.code())
    }
}

impl FromStr for PieceCode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), Some(k), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GameError::InvalidPieceCode { code: s.to_string() });
        };
        let color = match c.to_ascii_uppercase() {
            'W' => PieceColor::White,
            'B' => PieceColor::Black,
            _ => return Err(GameError::InvalidPieceCode { code: s.to_string() }),
        };
        let kind = PieceKind::from_code(k.to_ascii_uppercase())
            .ok_or_else(|| GameError::InvalidPieceCode { code: s.to_string() })?;
        Ok(PieceCode::new(color, kind))
    }
}

/// A board square, zero-based on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(GameError::InvalidSquare { text: s.to_string() });
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::new(file, rank).ok_or_else(|| GameError::InvalidSquare { text: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_code_all_has_twelve_unique_codes() {
        let codes: Vec<_> = PieceCode::all().collect();
        assert_eq!(codes.len(), 12);
        let unique: std::collections::HashSet<_> = codes.iter().map(|c| c.to_string()).collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_piece_code_display_and_parse() {
        let code = PieceCode::new(PieceColor::Black, PieceKind::Knight);
        assert_eq!(code.to_string(), "BN");
        assert_eq!(code.file_name(), "BN.png");
        assert_eq!("bn".parse::<PieceCode>().unwrap(), code);
        assert!("XK".parse::<PieceCode>().is_err());
        assert!("WKX".parse::<PieceCode>().is_err());
    }

    #[test]
    fn test_square_parse_corners() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square { file: 0, rank: 0 });
        assert_eq!("H8".parse::<Square>().unwrap(), Square { file: 7, rank: 7 });
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_display() {
        //! e4 is file 4, rank 3
        let sq = Square::new(4, 3).unwrap();
        assert_eq!(sq.to_string(), "e4");
        assert!(Square::new(8, 0).is_none());
    }

    #[test]
    fn test_color_opposite() {
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opposite(), PieceColor::White);
    }
}

//! Board orientation and edge labels
//!
//! Display rows/columns are counted from the top-left tile. With the normal
//! orientation rank 8 is the top row and file A the left column; flipping
//! reverses both axes.

use crate::game::types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// White at the bottom
    #[default]
    Normal,
    /// Black at the bottom
    Flipped,
}

impl Orientation {
    pub fn from_flipped(flipped: bool) -> Self {
        if flipped {
            Orientation::Flipped
        } else {
            Orientation::Normal
        }
    }

    pub fn is_flipped(self) -> bool {
        self == Orientation::Flipped
    }

    pub fn toggled(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Flipped,
            Orientation::Flipped => Orientation::Normal,
        }
    }

    /// Square shown at display `(row, col)`; both must be below 8
    pub fn square_at(self, row: u8, col: u8) -> Square {
        match self {
            Orientation::Normal => Square {
                file: col,
                rank: 7 - row,
            },
            Orientation::Flipped => Square {
                file: 7 - col,
                rank: row,
            },
        }
    }

    /// Display `(row, col)` of `square`
    pub fn display_of(self, square: Square) -> (u8, u8) {
        match self {
            Orientation::Normal => (7 - square.rank, square.file),
            Orientation::Flipped => (square.rank, 7 - square.file),
        }
    }
}

/// Edge label sequences, rank labels top to bottom and file labels left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub ranks: [char; 8],
    pub files: [char; 8],
}

impl Labels {
    pub fn for_orientation(orientation: Orientation) -> Self {
        let mut labels = Labels {
            ranks: ['8', '7', '6', '5', '4', '3', '2', '1'],
            files: ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'],
        };
        if orientation.is_flipped() {
            labels.reverse();
        }
        labels
    }

    pub fn reverse(&mut self) {
        self.ranks.reverse();
        self.files.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_corners() {
        let o = Orientation::Normal;
        assert_eq!(o.square_at(0, 0).to_string(), "a8");
        assert_eq!(o.square_at(7, 7).to_string(), "h1");
    }

    #[test]
    fn test_flipped_corners() {
        let o = Orientation::Flipped;
        assert_eq!(o.square_at(0, 0).to_string(), "h1");
        assert_eq!(o.square_at(7, 7).to_string(), "a8");
    }

    #[test]
    fn test_display_of_inverts_square_at() {
        for o in [Orientation::Normal, Orientation::Flipped] {
            for row in 0..8 {
                for col in 0..8 {
                    assert_eq!(o.display_of(o.square_at(row, col)), (row, col));
                }
            }
        }
    }

    #[test]
    fn test_labels_follow_orientation() {
        let normal = Labels::for_orientation(Orientation::Normal);
        let flipped = Labels::for_orientation(Orientation::Flipped);
        assert_eq!(normal.ranks[0], '8');
        assert_eq!(normal.files[0], 'A');
        assert_eq!(flipped.ranks[0], '1');
        assert_eq!(flipped.files[0], 'H');

        let mut twice = normal.clone();
        twice.reverse();
        assert_eq!(twice, flipped);
        twice.reverse();
        assert_eq!(twice, normal);
    }

    #[test]
    fn test_labels_match_squares_on_edges() {
        //! The label printed on an edge tile names that tile's own rank/file
        for o in [Orientation::Normal, Orientation::Flipped] {
            let labels = Labels::for_orientation(o);
            for i in 0..8u8 {
                let left = o.square_at(i, 0);
                assert_eq!(labels.ranks[i as usize], left.rank_char());
                let bottom = o.square_at(7, i);
                assert_eq!(labels.files[i as usize], bottom.file_char().to_ascii_uppercase());
            }
        }
    }
}

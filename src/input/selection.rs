//! Selection resource for tracking the picked-up piece

use bevy::prelude::*;

use crate::game::state::GameState;
use crate::game::types::{PieceKind, Square};
use crate::rendering::board::view::BoardView;

/// Square currently picked up, with the targets it may move to
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected: Option<Square>,
    pub possible_moves: Vec<Square>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    /// Handles a click on `square`, returning move text once a target is chosen
    ///
    /// Pawn moves onto the last rank are completed as queen promotions.
    pub fn click<G: GameState>(&mut self, square: Square, view: &BoardView<G>) -> Option<String> {
        if let Some(from) = self.selected {
            if from == square {
                self.clear();
                return None;
            }
            if self.possible_moves.contains(&square) {
                self.clear();
                let mut text = format!("{from}{square}");
                let is_pawn = view
                    .piece_at(from)
                    .is_some_and(|code| code.kind == PieceKind::Pawn);
                if is_pawn && (square.rank == 0 || square.rank == 7) {
                    text.push('q');
                }
                return Some(text);
            }
        }

        let own_piece = view
            .piece_at(square)
            .is_some_and(|code| code.color == view.turn_owner());
        if own_piece {
            self.selected = Some(square);
            self.possible_moves = view.legal_targets(square);
        } else {
            self.clear();
        }
        None
    }
}

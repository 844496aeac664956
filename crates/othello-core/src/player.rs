//! The computer opponent.

use tracing::debug;

use crate::board::Board;
use crate::disc::Color;
use crate::move_list::find_legal_moves;
use crate::rating::{MoveRating, pick_best_move};

/// Picks a move for `color` by rating every legal move one ply deep.
///
/// # Returns
///
/// The best rated move, or `None` if `color` has no legal move.
pub fn choose_move(board: &Board, color: Color) -> Option<MoveRating> {
    let moves = find_legal_moves(board, color);
    let choice = pick_best_move(board, &moves, color);
    if let Some(choice) = &choice {
        debug!(%color, %choice, candidates = moves.count(), "computer move");
    }
    choice
}

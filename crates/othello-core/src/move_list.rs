//! Legal move generation.

use arrayvec::ArrayVec;
use std::slice;
use tracing::trace;

use crate::board::Board;
use crate::disc::Color;
use crate::position::{Direction, Position, TOTAL_CELLS};
use crate::scanner;

/// The deduplicated legal moves of one color.
///
/// Moves keep the order in which they were first found: source disks in
/// row-major order, then the fixed order of [`Direction::ALL`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: ArrayVec<Position, TOTAL_CELLS>,
}

impl MoveList {
    /// Generates all legal moves for `color`.
    ///
    /// Every disk of `color` is scanned in all eight directions; a
    /// destination reachable from several disks or directions is listed
    /// once.
    pub fn new(board: &Board, color: Color) -> MoveList {
        let mut moves = ArrayVec::new();
        for source in board.disks(color) {
            for dir in Direction::ALL {
                let Some(hit) = scanner::find_move_in_direction(board, source, dir, color) else {
                    continue;
                };
                if !moves.contains(&hit) {
                    trace!(%source, ?dir, %hit, "legal move");
                    moves.push(hit);
                }
            }
        }
        MoveList { moves }
    }

    /// Returns the number of legal moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.moves.contains(&pos)
    }

    /// Returns an iterator over the moves in discovery order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.moves.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.moves
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Enumerates the legal moves of `color` on `board`.
#[inline]
pub fn find_legal_moves(board: &Board, color: Color) -> MoveList {
    MoveList::new(board, color)
}

//! Disk flip calculation for move execution.

use tracing::trace;

use crate::board::Board;
use crate::disc::Color;
use crate::error::BoardError;
use crate::position::{Direction, Position};
use crate::scanner;

/// Calculates which opponent disks flip when `color` plays at `pos`.
///
/// The flips of all eight directions are unioned. `pos` is assumed to be a
/// legal move; the board is not modified and `pos` itself may still be
/// empty.
///
/// # Returns
///
/// The captured positions grouped by direction in [`Direction::ALL`] order.
/// Empty if `pos` captures nothing.
pub fn compute_flips(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    let mut flipped = Vec::new();
    for dir in Direction::ALL {
        for captured in scanner::flips_in_direction(board, pos, dir, color) {
            if !flipped.contains(&captured) {
                flipped.push(captured);
            }
        }
    }
    trace!(%pos, ?color, count = flipped.len(), "computed flips");
    flipped
}

/// Turns over every disk in `flipped`.
///
/// # Errors
///
/// Returns `BoardError::EmptyCell` if one of the positions holds no disk.
/// Disks before the failing one stay flipped.
pub fn apply_flips(board: &mut Board, flipped: &[Position]) -> Result<(), BoardError> {
    flipped.iter().try_for_each(|&pos| board.flip(pos))
}

/// Places a disk of `color` at `pos` and turns over the captured disks.
///
/// Legality is not checked; a move that captures nothing only places the
/// disk.
///
/// # Returns
///
/// The flipped positions.
///
/// # Errors
///
/// Returns `BoardError::InvalidPlacement` if `pos` is occupied. The board
/// is left unchanged in that case.
pub fn play(board: &mut Board, pos: Position, color: Color) -> Result<Vec<Position>, BoardError> {
    let flipped = compute_flips(board, pos, color);
    board.place(pos, color)?;
    apply_flips(board, &flipped)?;
    Ok(flipped)
}

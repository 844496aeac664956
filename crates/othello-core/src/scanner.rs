//! Ray walks from a cell in one compass direction.
//!
//! Both walks step from `start + dir` and classify each cell relative to a
//! reference color. They differ only in how the walk ends: the legal-move
//! walk stops at the first empty cell, the flip walk stops at the first
//! disk of the reference color.

use crate::board::Board;
use crate::disc::{CellState, Color};
use crate::position::{Direction, Position};

/// Looks for a legal destination reachable from a disk of `color` at `start`.
///
/// The walk succeeds when it meets an empty cell right after a run of at
/// least one opponent disk. It fails when it meets a disk of `color`, an
/// empty cell directly next to `start`, or the edge of the board.
///
/// # Returns
///
/// The empty cell that ends the run of opponent disks, if any.
pub fn find_move_in_direction(
    board: &Board,
    start: Position,
    dir: Direction,
    color: Color,
) -> Option<Position> {
    let own = CellState::from(color);
    let opponent = CellState::from(color.opposite());

    let mut prev = own;
    let mut cur = start;
    loop {
        cur = cur.offset(dir)?;
        let state = board.cell_state_at(cur);
        if state == own {
            return None;
        }
        if state.is_empty() {
            return (prev == opponent).then_some(cur);
        }
        prev = state;
    }
}

/// Collects the opponent disks captured in one direction by a disk of
/// `color` placed at `start`.
///
/// The walk accumulates opponent disks and succeeds only when the run is
/// closed by a disk of `color`. Running off the board, meeting an empty
/// cell, or finding a disk of `color` directly next to `start` captures
/// nothing.
///
/// # Returns
///
/// The captured positions ordered outward from `start`; empty when nothing
/// is captured in this direction.
pub fn flips_in_direction(
    board: &Board,
    start: Position,
    dir: Direction,
    color: Color,
) -> Vec<Position> {
    let own = CellState::from(color);
    let opponent = CellState::from(color.opposite());

    let mut captured = Vec::new();
    let mut prev = own;
    let mut cur = start;
    loop {
        let Some(next) = cur.offset(dir) else {
            return Vec::new();
        };
        cur = next;

        let state = board.cell_state_at(cur);
        if state == own {
            if prev == opponent {
                return captured;
            }
            return Vec::new();
        }
        if state.is_empty() {
            return Vec::new();
        }
        captured.push(cur);
        prev = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_find_move_opening() {
        let board = Board::new();
        // Black e4 looks left across white d4 to c4.
        assert_eq!(
            find_move_in_direction(&board, pos("e4"), Direction::Left, Color::Black),
            Some(pos("c4"))
        );
        // Black e4 looks down onto white e5 and reaches e6.
        assert_eq!(
            find_move_in_direction(&board, pos("e4"), Direction::Down, Color::Black),
            Some(pos("e6"))
        );
        // Adjacent empty cell is not a move.
        assert_eq!(
            find_move_in_direction(&board, pos("e4"), Direction::Up, Color::Black),
            None
        );
        // Own disk blocks the ray.
        assert_eq!(
            find_move_in_direction(&board, pos("e4"), Direction::DownLeft, Color::Black),
            None
        );
    }

    #[test]
    fn test_find_move_runs_off_board() {
        let board = Board::from_string(
            "XOOOOOOO
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
        );
        assert_eq!(
            find_move_in_direction(&board, pos("a1"), Direction::Right, Color::Black),
            None
        );
        assert_eq!(
            find_move_in_direction(&board, pos("a1"), Direction::Up, Color::Black),
            None
        );
    }

    #[test]
    fn test_find_move_long_run() {
        let board = Board::from_string(
            "XOOOO---
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
        );
        assert_eq!(
            find_move_in_direction(&board, pos("a1"), Direction::Right, Color::Black),
            Some(pos("f1"))
        );
    }

    #[test]
    fn test_flips_opening() {
        let board = Board::new();
        // e3 sits directly on black e4.
        assert!(flips_in_direction(&board, pos("e3"), Direction::Down, Color::Black).is_empty());
        // Black at c4 captures white d4, closed by black e4.
        assert_eq!(
            flips_in_direction(&board, pos("c4"), Direction::Right, Color::Black),
            vec![pos("d4")]
        );
    }

    #[test]
    fn test_flips_requires_closing_disk() {
        let board = Board::from_string(
            "-OOOX---
             -OO-----
             --------
             --------
             --------
             --------
             --------
             --------",
        );
        assert_eq!(
            flips_in_direction(&board, pos("a1"), Direction::Right, Color::Black),
            vec![pos("b1"), pos("c1"), pos("d1")]
        );
        // Run ends on an empty cell.
        assert!(flips_in_direction(&board, pos("a2"), Direction::Right, Color::Black).is_empty());
        // Run ends at the edge.
        assert!(flips_in_direction(&board, pos("a1"), Direction::Down, Color::Black).is_empty());
    }

    #[test]
    fn test_flips_own_disk_adjacent() {
        let board = Board::from_string(
            "-XO-----
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
        );
        assert!(flips_in_direction(&board, pos("a1"), Direction::Right, Color::Black).is_empty());
        assert_eq!(
            flips_in_direction(&board, pos("a1"), Direction::Right, Color::White),
            vec![pos("b1")]
        );
    }
}

//! Single-ply heuristic move rating.
//!
//! A candidate is classified by where it sits on the board:
//!
//! 1. Corners rate 10.
//! 2. Other edge cells are rated by matching the whole edge line against
//!    the border pattern table.
//! 3. Cells diagonally adjacent to a corner are rated by matching the long
//!    diagonal through them against the diagonal pattern table.
//! 4. Cells one step in from an edge rate -3 when the three edge cells
//!    next to them are empty.
//! 5. Everything else rates 0.

use std::fmt;

use tracing::{debug, instrument};

use crate::board::Board;
use crate::disc::Color;
use crate::line::{self, encode_line};
use crate::pattern::{border_patterns, diagonal_patterns};
use crate::position::{BOARD_SIZE, Direction, Position, is_border_index, is_next_to_border_index};

/// Rating given to corner moves.
pub const CORNER_RATING: i32 = 10;

/// Rating given to a move that opens an untouched edge segment.
pub const OPEN_EDGE_RATING: i32 = -3;

/// Length of the edge segment checked next to a near-edge cell.
const EDGE_SEGMENT_LEN: usize = 3;

/// The rating of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRating {
    pub position: Position,
    pub rating: i32,
    /// Index of the border rule that produced the rating, if any.
    pub rule: Option<usize>,
}

impl MoveRating {
    fn fixed(position: Position, rating: i32) -> MoveRating {
        MoveRating {
            position,
            rating,
            rule: None,
        }
    }

    /// Returns the rule index, or -1 when no border rule was involved.
    pub fn rule_number(&self) -> i64 {
        self.rule.map_or(-1, |i| i as i64)
    }
}

impl fmt::Display for MoveRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Some(rule) => write!(f, "{} {} ({rule})", self.position, self.rating),
            None => write!(f, "{} {}", self.position, self.rating),
        }
    }
}

/// Rates `pos` as a move for `my_color`.
///
/// The board is only read; `pos` need not be empty or legal.
#[instrument(level = "trace", skip(board))]
pub fn rate(board: &Board, pos: Position, my_color: Color) -> MoveRating {
    let (row, col) = (pos.row(), pos.col());

    if pos.is_corner() {
        MoveRating::fixed(pos, CORNER_RATING)
    } else if is_border_index(row) {
        let start = Position::from_coords(row, 1);
        rate_border(board, pos, start, Direction::Right, my_color)
    } else if is_border_index(col) {
        let start = Position::from_coords(1, col);
        rate_border(board, pos, start, Direction::Down, my_color)
    } else if is_next_to_border_index(row) && is_next_to_border_index(col) {
        let (start, dir) = if row == col {
            (Position::from_coords(1, 1), Direction::DownRight)
        } else {
            (Position::from_coords(1, BOARD_SIZE), Direction::DownLeft)
        };
        let diagonal = encode_line(board, start, dir, BOARD_SIZE, Some(pos), my_color);
        let score = diagonal_patterns()
            .find_match(&diagonal)
            .map_or(0, |m| m.score);
        debug!(%diagonal, score, "diagonal rated");
        MoveRating::fixed(pos, score)
    } else if opens_edge(board, pos, my_color) {
        MoveRating::fixed(pos, OPEN_EDGE_RATING)
    } else {
        MoveRating::fixed(pos, 0)
    }
}

fn rate_border(
    board: &Board,
    pos: Position,
    start: Position,
    dir: Direction,
    my_color: Color,
) -> MoveRating {
    let border = encode_line(board, start, dir, BOARD_SIZE, Some(pos), my_color);
    match border_patterns().find_match(&border) {
        Some(m) => {
            debug!(%border, rule = m.index, score = m.score, reversed = m.reversed, "border rated");
            MoveRating {
                position: pos,
                rating: m.score,
                rule: Some(m.index),
            }
        }
        None => {
            debug!(%border, "no border rule matched");
            MoveRating::fixed(pos, 0)
        }
    }
}

/// `true` when `pos` is one step in from an edge and the three edge cells
/// touching it are empty.
///
/// Rows are checked before columns: 2, 7, then columns 2, 7.
fn opens_edge(board: &Board, pos: Position, my_color: Color) -> bool {
    let (row, col) = (pos.row(), pos.col());
    let empty_segment = |start: Position, dir: Direction| {
        let segment = encode_line(board, start, dir, EDGE_SEGMENT_LEN, None, my_color);
        segment.len() == EDGE_SEGMENT_LEN && segment.chars().all(|c| c == line::EMPTY)
    };

    if row == 2 && empty_segment(Position::from_coords(1, col - 1), Direction::Right) {
        return true;
    }
    if row == BOARD_SIZE - 1
        && empty_segment(Position::from_coords(BOARD_SIZE, col - 1), Direction::Right)
    {
        return true;
    }
    if col == 2 && empty_segment(Position::from_coords(row - 1, 1), Direction::Down) {
        return true;
    }
    col == BOARD_SIZE - 1
        && empty_segment(Position::from_coords(row - 1, BOARD_SIZE), Direction::Down)
}

/// Rates every candidate and orders them best first.
///
/// The sort is stable, so equally rated candidates keep their input order.
pub fn rate_moves<'a>(
    board: &Board,
    candidates: impl IntoIterator<Item = &'a Position>,
    my_color: Color,
) -> Vec<MoveRating> {
    let mut ratings: Vec<MoveRating> = candidates
        .into_iter()
        .map(|&pos| rate(board, pos, my_color))
        .collect();
    ratings.sort_by(|a, b| b.rating.cmp(&a.rating));
    ratings
}

/// Picks the highest rated candidate; ties go to the earliest candidate.
///
/// # Returns
///
/// `None` if `candidates` is empty.
pub fn pick_best_move<'a>(
    board: &Board,
    candidates: impl IntoIterator<Item = &'a Position>,
    my_color: Color,
) -> Option<MoveRating> {
    rate_moves(board, candidates, my_color).into_iter().next()
}

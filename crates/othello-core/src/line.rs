//! Textual fingerprints of board lines for pattern rating.
//!
//! A line is rendered one symbol per cell over the alphabet `_`, `m`, `o`,
//! `x`, relative to the color doing the rating:
//!
//! | Symbol | Cell                                   |
//! |--------|----------------------------------------|
//! | `x`    | the candidate cell, whatever it holds  |
//! | `_`    | empty                                  |
//! | `m`    | disk of the rating color               |
//! | `o`    | disk of the opponent                   |

use crate::board::Board;
use crate::disc::{CellState, Color};
use crate::position::{Direction, Position};

pub const EMPTY: char = '_';
pub const MINE: char = 'm';
pub const OPPONENT: char = 'o';
pub const CANDIDATE: char = 'x';

/// Encodes up to `max_len` cells starting at `start` and stepping by `dir`.
///
/// The walk stops early when the next step leaves the board. The cell equal
/// to `highlight` is written as `x` regardless of its content.
pub fn encode_line(
    board: &Board,
    start: Position,
    dir: Direction,
    max_len: usize,
    highlight: Option<Position>,
    my_color: Color,
) -> String {
    let mine = CellState::from(my_color);

    let mut line = String::with_capacity(max_len);
    let mut cur = Some(start);
    while let Some(pos) = cur {
        if line.len() >= max_len {
            break;
        }
        let symbol = if Some(pos) == highlight {
            CANDIDATE
        } else {
            match board.cell_state_at(pos) {
                CellState::Empty => EMPTY,
                state if state == mine => MINE,
                _ => OPPONENT,
            }
        };
        line.push(symbol);
        cur = pos.offset(dir);
    }
    line
}

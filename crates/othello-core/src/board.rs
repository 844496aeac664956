//! Othello board representation as a flat array of cells.

use std::fmt;

use crate::disc::{CellState, Color};
use crate::error::BoardError;
use crate::position::{Position, TOTAL_CELLS};

/// Disk counts for both colors, derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Total number of disks on the board.
    pub fn total(&self) -> u32 {
        self.black + self.white
    }

    /// Returns the count for one color.
    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// The color with more disks, or `None` on a tie.
    pub fn leader(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "black {} - white {}", self.black, self.white)
    }
}

/// An 8x8 Othello board.
///
/// Cells are stored row-major and indexed by [`Position::index`]. A `Position`
/// is always on the playable area, so the board never sees the sentinel
/// rows and columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [CellState; TOTAL_CELLS],
}

impl Default for Board {
    /// Creates a board with the standard opening position.
    ///
    /// - White disks on d4 and e5
    /// - Black disks on e4 and d5
    fn default() -> Self {
        let mut board = Board::empty();
        board.set(Position::from_coords(4, 4), CellState::White);
        board.set(Position::from_coords(5, 5), CellState::White);
        board.set(Position::from_coords(4, 5), CellState::Black);
        board.set(Position::from_coords(5, 4), CellState::Black);
        board
    }
}

impl Board {
    /// Creates a new `Board` with the standard opening position.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no disks on it.
    pub fn empty() -> Board {
        Board {
            cells: [CellState::Empty; TOTAL_CELLS],
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string lists the cells from a1 to h8 row by row. `X` is black,
    /// `O` is white and any other character is empty. Whitespace is
    /// skipped, so the board can be written one row per line. Cells beyond
    /// the 64th are ignored and missing cells are empty.
    pub fn from_string(board_string: &str) -> Board {
        let mut board = Board::empty();
        let cells = board_string.chars().filter(|c| !c.is_whitespace());
        for (pos, c) in Position::iter().zip(cells) {
            board.set(pos, CellState::from_char(c));
        }
        board
    }

    /// Returns the content of the cell at `pos`.
    #[inline]
    pub fn cell_state_at(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// `true` if no disk occupies `pos`.
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell_state_at(pos).is_empty()
    }

    /// Places a disk of `color` on an empty cell.
    ///
    /// This does not check legality or flip anything; see
    /// [`compute_flips`](crate::flip::compute_flips).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidPlacement` if the cell is occupied.
    pub fn place(&mut self, pos: Position, color: Color) -> Result<(), BoardError> {
        if !self.is_empty_at(pos) {
            return Err(BoardError::InvalidPlacement(pos));
        }
        self.set(pos, color.into());
        Ok(())
    }

    /// Turns the disk at `pos` over.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::EmptyCell` if there is no disk at `pos`.
    pub fn flip(&mut self, pos: Position) -> Result<(), BoardError> {
        match self.cell_state_at(pos).color() {
            Some(color) => {
                self.set(pos, color.opposite().into());
                Ok(())
            }
            None => Err(BoardError::EmptyCell(pos)),
        }
    }

    /// Counts the disks of each color.
    pub fn count_disks(&self) -> Score {
        self.cells
            .iter()
            .fold(Score::default(), |mut score, cell| {
                match cell {
                    CellState::Black => score.black += 1,
                    CellState::White => score.white += 1,
                    CellState::Empty => {}
                }
                score
            })
    }

    /// `true` when all 64 cells hold a disk.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over the positions holding a disk of `color`, row-major.
    pub fn disks(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        Position::iter().filter(move |&pos| self.cell_state_at(pos) == color)
    }

    #[inline]
    fn set(&mut self, pos: Position, state: CellState) {
        self.cells[pos.index()] = state;
    }
}

impl fmt::Display for Board {
    /// Formats the board as eight lines of `X`, `O` and `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in Position::iter().enumerate() {
            if i > 0 && pos.col() == 1 {
                writeln!(f)?;
            }
            write!(f, "{}", self.cell_state_at(pos).to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.count_disks(), Score { black: 2, white: 2 });
        assert_eq!(board.cell_state_at(Position::from_coords(4, 4)), CellState::White);
        assert_eq!(board.cell_state_at(Position::from_coords(5, 5)), CellState::White);
        assert_eq!(board.cell_state_at(Position::from_coords(4, 5)), CellState::Black);
        assert_eq!(board.cell_state_at(Position::from_coords(5, 4)), CellState::Black);
    }

    #[test]
    fn test_new_board() {
        assert_eq!(Board::new(), Board::default());
        assert_eq!(Board::empty().count_disks().total(), 0);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string(
            "--------
             --------
             --------
             ---OX---
             ---XO---
             --------
             --------
             --------",
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let board = Board::new();
        let expected = "--------\n\
                        --------\n\
                        --------\n\
                        ---OX---\n\
                        ---XO---\n\
                        --------\n\
                        --------\n\
                        --------";
        assert_eq!(board.to_string(), expected);
        assert_eq!(Board::from_string(&board.to_string()), board);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        assert!(board.place(pos("e3"), Color::Black).is_ok());
        assert_eq!(board.cell_state_at(pos("e3")), CellState::Black);
        assert_eq!(board.count_disks().total(), 5);

        assert_eq!(
            board.place(pos("e3"), Color::White),
            Err(BoardError::InvalidPlacement(pos("e3")))
        );
        assert_eq!(
            board.place(pos("d4"), Color::Black),
            Err(BoardError::InvalidPlacement(pos("d4")))
        );
    }

    #[test]
    fn test_flip() {
        let mut board = Board::new();
        board.flip(pos("d4")).unwrap();
        assert_eq!(board.cell_state_at(pos("d4")), CellState::Black);
        board.flip(pos("d4")).unwrap();
        assert_eq!(board.cell_state_at(pos("d4")), CellState::White);

        assert_eq!(board.flip(pos("a1")), Err(BoardError::EmptyCell(pos("a1"))));
    }

    #[test]
    fn test_flip_preserves_total() {
        let mut board = Board::new();
        let before = board.count_disks();
        board.flip(pos("e5")).unwrap();
        let after = board.count_disks();
        assert_eq!(before.total(), after.total());
        assert_eq!(after, Score { black: 3, white: 1 });
    }

    #[test]
    fn test_disks() {
        let board = Board::new();
        let black: Vec<Position> = board.disks(Color::Black).collect();
        assert_eq!(black, vec![pos("e4"), pos("d5")]);
        let white: Vec<Position> = board.disks(Color::White).collect();
        assert_eq!(white, vec![pos("d4"), pos("e5")]);
    }

    #[test]
    fn test_is_full() {
        assert!(!Board::new().is_full());
        let full = Board::from_string(&"XO".repeat(32));
        assert!(full.is_full());
        assert_eq!(full.count_disks(), Score { black: 32, white: 32 });
    }

    #[test]
    fn test_score() {
        let score = Score { black: 40, white: 24 };
        assert_eq!(score.total(), 64);
        assert_eq!(score.leader(), Some(Color::Black));
        assert_eq!(score.of(Color::White), 24);
        assert_eq!(Score { black: 32, white: 32 }.leader(), None);
        assert_eq!(Score { black: 1, white: 3 }.leader(), Some(Color::White));
    }
}

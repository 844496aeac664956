use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A playable cell on the board, addressed by 1-based row and column.
///
/// Rows and columns 0 and 9 form the sentinel border around the playable
/// area; a `Position` can never refer to them. Scans that step past the
/// edge get `None` from [`Position::offset`] instead.
///
/// ```text
///     a b c d e f g h
///   1 . . . . . . . .
///   2 . . . . . . . .
///   ...
///   8 . . . . . . . .
/// ```
///
/// Algebraic notation uses the column letter followed by the row digit, so
/// row 3, column 5 is `e3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, checking that it lies on the playable area.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfBounds` if either coordinate is outside `1..=8`.
    pub fn new(row: i32, col: i32) -> Result<Position, BoardError> {
        if Self::in_bounds(row, col) {
            Ok(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Creates a position from coordinates known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `1..=8`.
    pub fn from_coords(row: usize, col: usize) -> Position {
        assert!((1..=BOARD_SIZE).contains(&row), "Invalid row: {row}");
        assert!((1..=BOARD_SIZE).contains(&col), "Invalid col: {col}");
        Position {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub fn in_bounds(row: i32, col: i32) -> bool {
        (1..=BOARD_SIZE as i32).contains(&row) && (1..=BOARD_SIZE as i32).contains(&col)
    }

    /// Row number, 1 (top) to 8 (bottom).
    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column number, 1 (left, `a`) to 8 (right, `h`).
    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub fn index(self) -> usize {
        (self.row() - 1) * BOARD_SIZE + (self.col() - 1)
    }

    /// Returns the neighbouring position one step in `dir`, or `None` when
    /// that step leaves the playable area.
    #[inline]
    pub fn offset(self, dir: Direction) -> Option<Position> {
        let (d_row, d_col) = dir.delta();
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        Position::new(row, col).ok()
    }

    /// Returns an iterator over all 64 positions in row-major order.
    pub fn iter() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position::from_coords(row, col)))
    }

    /// `true` if both coordinates are 1 or 8.
    #[inline]
    pub fn is_corner(self) -> bool {
        is_border_index(self.row()) && is_border_index(self.col())
    }
}

#[inline]
pub(crate) fn is_border_index(i: usize) -> bool {
    i == 1 || i == BOARD_SIZE
}

#[inline]
pub(crate) fn is_next_to_border_index(i: usize) -> bool {
    i == 2 || i == BOARD_SIZE - 1
}

/// One of the eight compass directions a scan can follow.
///
/// Rows grow downward, so `Up` decreases the row number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions in the fixed scan order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Returns the `(row, col)` unit step of this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::UpRight => (-1, 1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::Left => (0, -1),
            Direction::DownLeft => (1, -1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Error type for position parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePositionError {
    /// Invalid position string format (must be 2 characters)
    InvalidFormat,
    /// Invalid column character (must be a-h or A-H)
    InvalidColumn(char),
    /// Invalid row character (must be 1-8)
    InvalidRow(char),
}

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePositionError::InvalidFormat => write!(
                f,
                "Invalid position format: must be 2 characters (e.g., 'e3')"
            ),
            ParsePositionError::InvalidColumn(c) => {
                write!(f, "Invalid column '{c}': must be a-h or A-H")
            }
            ParsePositionError::InvalidRow(c) => write!(f, "Invalid row '{c}': must be 1-8"),
        }
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses algebraic notation such as `"e3"` (column letter, row digit).
    /// Both uppercase and lowercase letters are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(col_char), Some(row_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParsePositionError::InvalidFormat);
        };

        let col_lower = col_char.to_ascii_lowercase();
        if !('a'..='h').contains(&col_lower) {
            return Err(ParsePositionError::InvalidColumn(col_char));
        }
        if !('1'..='8').contains(&row_char) {
            return Err(ParsePositionError::InvalidRow(row_char));
        }

        let col = (col_lower as u8 - b'a') as usize + 1;
        let row = (row_char as u8 - b'1') as usize + 1;
        Ok(Position::from_coords(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (self.col - 1) + b'a';
        let row = (self.row - 1) + b'1';
        write!(f, "{}{}", col as char, row as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert!(Position::new(1, 1).is_ok());
        assert!(Position::new(8, 8).is_ok());
        assert_eq!(
            Position::new(0, 4),
            Err(BoardError::OutOfBounds { row: 0, col: 4 })
        );
        assert!(Position::new(4, 9).is_err());
        assert!(Position::new(-1, 3).is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid row: 9")]
    fn test_from_coords_invalid_row() {
        let _ = Position::from_coords(9, 1);
    }

    #[test]
    fn test_index() {
        assert_eq!(Position::from_coords(1, 1).index(), 0);
        assert_eq!(Position::from_coords(1, 8).index(), 7);
        assert_eq!(Position::from_coords(2, 1).index(), 8);
        assert_eq!(Position::from_coords(8, 8).index(), 63);
    }

    #[test]
    fn test_iter_row_major() {
        let all: Vec<Position> = Position::iter().collect();
        assert_eq!(all.len(), TOTAL_CELLS);
        for (i, pos) in all.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_offset() {
        let pos = Position::from_coords(4, 4);
        assert_eq!(pos.offset(Direction::Up), Some(Position::from_coords(3, 4)));
        assert_eq!(
            pos.offset(Direction::DownLeft),
            Some(Position::from_coords(5, 3))
        );

        let corner = Position::from_coords(1, 8);
        assert_eq!(corner.offset(Direction::Up), None);
        assert_eq!(corner.offset(Direction::Right), None);
        assert_eq!(corner.offset(Direction::UpRight), None);
        assert_eq!(
            corner.offset(Direction::DownLeft),
            Some(Position::from_coords(2, 7))
        );
    }

    #[test]
    fn test_directions_are_distinct_units() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            let (dr, dc) = a.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }

    #[test]
    fn test_corners() {
        assert!(Position::from_coords(1, 1).is_corner());
        assert!(Position::from_coords(8, 1).is_corner());
        assert!(!Position::from_coords(1, 4).is_corner());
        assert!(!Position::from_coords(2, 2).is_corner());
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Position::from_coords(3, 5).to_string(), "e3");
        assert_eq!(Position::from_coords(1, 1).to_string(), "a1");
        assert_eq!(Position::from_coords(8, 8).to_string(), "h8");

        for pos in Position::iter() {
            let s = pos.to_string();
            assert_eq!(s.parse::<Position>().unwrap(), pos);
            assert_eq!(s.to_uppercase().parse::<Position>().unwrap(), pos);
        }
        assert_eq!(" c5\n".parse::<Position>().unwrap(), Position::from_coords(5, 3));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "e".parse::<Position>(),
            Err(ParsePositionError::InvalidFormat)
        );
        assert_eq!(
            "e34".parse::<Position>(),
            Err(ParsePositionError::InvalidFormat)
        );
        assert_eq!(
            "z3".parse::<Position>(),
            Err(ParsePositionError::InvalidColumn('z'))
        );
        assert_eq!(
            "a9".parse::<Position>(),
            Err(ParsePositionError::InvalidRow('9'))
        );
        assert_eq!(
            ParsePositionError::InvalidRow('9').to_string(),
            "Invalid row '9': must be 1-8"
        );
    }
}

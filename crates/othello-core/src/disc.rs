//! Disk colors and cell contents.

use std::fmt;
use std::str::FromStr;

/// The color of a player and of the disks they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the opposing color.
    ///
    /// # Returns
    ///
    /// * `Color::White` for `Color::Black`
    /// * `Color::Black` for `Color::White`
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Converts the color to the character used in board strings.
    ///
    /// # Returns
    ///
    /// * `'X'` for `Color::Black`
    /// * `'O'` for `Color::White`
    pub fn to_char(self) -> char {
        CellState::from(self).to_char()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Error returned when a string does not name a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid color '{}': must be black or white", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `black`/`white` (any case) or the board characters `X`/`O`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// The content of a single board cell.
///
/// * `Empty` - No disk on the cell.
/// * `Black` - A black disk.
/// * `White` - A white disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Black,
    White,
}

impl CellState {
    /// Converts the cell to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `CellState::Empty`
    /// * `'X'` for `CellState::Black`
    /// * `'O'` for `CellState::White`
    pub fn to_char(self) -> char {
        match self {
            CellState::Empty => '-',
            CellState::Black => 'X',
            CellState::White => 'O',
        }
    }

    /// Parses a board character. Anything other than `X`/`O` is empty.
    pub fn from_char(c: char) -> CellState {
        match c {
            'X' | 'x' => CellState::Black,
            'O' | 'o' => CellState::White,
            _ => CellState::Empty,
        }
    }

    /// Returns the color of the disk on this cell, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Color::Black),
            CellState::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

impl From<Color> for CellState {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Black => CellState::Black,
            Color::White => CellState::White,
        }
    }
}

impl PartialEq<Color> for CellState {
    #[inline]
    fn eq(&self, other: &Color) -> bool {
        *self == CellState::from(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().opposite(), Color::Black);
    }

    #[test]
    fn test_cell_state_color() {
        assert_eq!(CellState::Empty.color(), None);
        assert_eq!(CellState::Black.color(), Some(Color::Black));
        assert_eq!(CellState::White.color(), Some(Color::White));
        assert!(CellState::White == Color::White);
        assert!(CellState::Empty != Color::Black);
    }

    #[test]
    fn test_chars() {
        assert_eq!(CellState::from_char('X'), CellState::Black);
        assert_eq!(CellState::from_char('O'), CellState::White);
        assert_eq!(CellState::from_char('-'), CellState::Empty);
        assert_eq!(Color::White.to_char(), 'O');
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("black".parse::<Color>().unwrap(), Color::Black);
        assert_eq!(" White ".parse::<Color>().unwrap(), Color::White);
        assert_eq!("X".parse::<Color>().unwrap(), Color::Black);
        assert!("red".parse::<Color>().is_err());
    }
}

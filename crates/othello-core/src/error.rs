//! Error types for board mutation and game play.

use std::fmt;

use crate::position::Position;

/// Errors raised by [`Board`](crate::board::Board) mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A disk was placed on a cell that already holds one.
    InvalidPlacement(Position),
    /// A flip was requested on a cell without a disk.
    EmptyCell(Position),
    /// A coordinate outside the playable 8x8 area.
    OutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPlacement(pos) => write!(f, "Cell {pos} is already occupied"),
            BoardError::EmptyCell(pos) => write!(f, "Cell {pos} has no disk to flip"),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({row}, {col}) is outside the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors raised while playing a game through [`GameState`](crate::game_state::GameState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The position is not in the legal-move set of the side to move.
    IllegalMove(Position),
    /// The game has already ended.
    GameOver,
    Board(BoardError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(pos) => write!(f, "Illegal move: {pos}"),
            GameError::GameOver => write!(f, "The game is over"),
            GameError::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let pos = Position::new(3, 4).unwrap();
        assert_eq!(
            BoardError::InvalidPlacement(pos).to_string(),
            "Cell d3 is already occupied"
        );
        assert_eq!(
            BoardError::EmptyCell(pos).to_string(),
            "Cell d3 has no disk to flip"
        );
        assert_eq!(
            BoardError::OutOfBounds { row: 0, col: 9 }.to_string(),
            "Position (0, 9) is outside the board"
        );
        assert_eq!(GameError::IllegalMove(pos).to_string(), "Illegal move: d3");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = GameError::from(BoardError::OutOfBounds { row: 9, col: 1 });
        assert!(err.source().is_some());
        assert!(GameError::GameOver.source().is_none());
    }
}

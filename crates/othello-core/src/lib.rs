//! Othello rules engine with a pattern-table move rater.

pub mod board;
pub mod disc;
pub mod error;
pub mod flip;
pub mod game_state;
pub mod line;
pub mod move_list;
pub mod pattern;
pub mod perft;
pub mod player;
pub mod position;
pub mod rating;
pub mod scanner;

pub use board::{Board, Score};
pub use disc::{CellState, Color};
pub use error::{BoardError, GameError};
pub use game_state::{GameState, Outcome, Placement, Turn};
pub use move_list::{MoveList, find_legal_moves};
pub use position::{Direction, Position};
pub use rating::MoveRating;

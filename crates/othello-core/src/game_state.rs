//! Game state management for Othello.
//!
//! `GameState` owns the board and the side to move, applies placements,
//! hands the turn over (including passes) and detects the end of the game.

use tracing::{debug, info, instrument};

use crate::board::{Board, Score};
use crate::disc::Color;
use crate::error::GameError;
use crate::flip;
use crate::move_list::{MoveList, find_legal_moves};
use crate::position::Position;

/// A disk placed on the board together with the disks it turned over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub color: Color,
    pub flipped: Vec<Position>,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub score: Score,
    /// `None` on a draw.
    pub winner: Option<Color>,
    /// `true` when neither side could move while empty cells were left.
    pub stalemate: bool,
}

impl Outcome {
    fn from_board(board: &Board) -> Outcome {
        let score = board.count_disks();
        Outcome {
            score,
            winner: score.leader(),
            stalemate: !board.is_full(),
        }
    }
}

/// What happens after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The given color moves next.
    Move(Color),
    /// `passed` has no legal move, so `next` moves again.
    Pass { passed: Color, next: Color },
    /// Neither side can continue.
    GameOver(Outcome),
}

/// Represents the state of an Othello game.
///
/// Handles move execution, automatic passing, game end detection, move
/// history and undo.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    outcome: Option<Outcome>,
    /// Every placement with the board as it was before it.
    history: Vec<(Placement, Board)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the opening position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Color::Black,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Creates a game from an arbitrary position.
    ///
    /// If `side_to_move` has no legal move the turn passes to the other
    /// color; if neither can move the game is already over.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            outcome: None,
            history: Vec::new(),
        };
        let turn = state.hand_over(side_to_move);
        debug!(?turn, "game set up from board");
        state
    }

    /// Starts over from the opening position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Current disk counts.
    pub fn score(&self) -> Score {
        self.board.count_disks()
    }

    /// Legal moves of the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> MoveList {
        if self.outcome.is_some() {
            return MoveList::default();
        }
        find_legal_moves(&self.board, self.side_to_move)
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Plays `pos` for the side to move.
    ///
    /// # Errors
    ///
    /// See [`GameState::play_move_with`].
    pub fn play_move(&mut self, pos: Position) -> Result<Turn, GameError> {
        self.play_move_with(pos, |_| {})
    }

    /// Plays `pos` for the side to move and hands the turn over.
    ///
    /// `commit` runs once the disk is placed and every captured disk is
    /// flipped, before the next side is determined.
    ///
    /// # Errors
    ///
    /// - `GameError::GameOver` if the game has ended.
    /// - `GameError::IllegalMove` if `pos` is not a legal move for the side
    ///   to move.
    #[instrument(level = "debug", skip(self, commit), fields(color = %self.side_to_move))]
    pub fn play_move_with<F>(&mut self, pos: Position, commit: F) -> Result<Turn, GameError>
    where
        F: FnOnce(&Placement),
    {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        let color = self.side_to_move;
        if !find_legal_moves(&self.board, color).contains(pos) {
            return Err(GameError::IllegalMove(pos));
        }

        let before = self.board;
        let flipped = flip::play(&mut self.board, pos, color)?;
        let placement = Placement {
            position: pos,
            color,
            flipped,
        };
        debug!(flipped = placement.flipped.len(), "placed");
        commit(&placement);
        self.history.push((placement, before));

        Ok(self.hand_over(color.opposite()))
    }

    /// Gives the turn to `next`, passing back if it cannot move.
    fn hand_over(&mut self, next: Color) -> Turn {
        let turn = if self.board.is_full() {
            self.finish()
        } else if !find_legal_moves(&self.board, next).is_empty() {
            self.side_to_move = next;
            Turn::Move(next)
        } else if !find_legal_moves(&self.board, next.opposite()).is_empty() {
            info!(passed = %next, "no legal move, passing");
            self.side_to_move = next.opposite();
            Turn::Pass {
                passed: next,
                next: next.opposite(),
            }
        } else {
            self.finish()
        };
        debug!(?turn, "turn handed over");
        turn
    }

    fn finish(&mut self) -> Turn {
        let outcome = Outcome::from_board(&self.board);
        info!(score = %outcome.score, stalemate = outcome.stalemate, "game over");
        self.outcome = Some(outcome);
        Turn::GameOver(outcome)
    }

    /// Placements in the order they were played.
    pub fn history(&self) -> impl Iterator<Item = &Placement> {
        self.history.iter().map(|(placement, _)| placement)
    }

    /// Returns the position of the most recent placement.
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().map(|(placement, _)| placement.position)
    }

    /// Takes back the most recent placement.
    ///
    /// # Returns
    ///
    /// `true` if a placement was undone, `false` if there was none.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((placement, before)) => {
                self.board = before;
                self.side_to_move = placement.color;
                self.outcome = None;
                true
            }
            None => false,
        }
    }
}

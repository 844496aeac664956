//! Computer against computer games.

use std::fmt;

use anyhow::{Context, Result};
use othello_core::player::choose_move;
use othello_core::{Color, GameState, Outcome};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::game;

/// Totals over a series of games.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    /// Games that ended with empty cells left.
    pub stalemates: usize,
    pub black_disks: u64,
    pub white_disks: u64,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        self.games += 1;
        match outcome.winner {
            Some(Color::Black) => self.black_wins += 1,
            Some(Color::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
        if outcome.stalemate {
            self.stalemates += 1;
        }
        self.black_disks += u64::from(outcome.score.black);
        self.white_disks += u64::from(outcome.score.white);
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games:       {}", self.games)?;
        writeln!(f, "black wins:  {}", self.black_wins)?;
        writeln!(f, "white wins:  {}", self.white_wins)?;
        writeln!(f, "draws:       {}", self.draws)?;
        writeln!(f, "stalemates:  {}", self.stalemates)?;
        write!(f, "disks:       black {} - white {}", self.black_disks, self.white_disks)
    }
}

/// Plays `games` games, each opening with `random_plies` uniformly random
/// legal moves before both sides switch to the rater.
pub fn run(games: usize, random_plies: usize, seed: Option<u64>) -> Result<Summary> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut summary = Summary::default();
    for index in 0..games {
        let (outcome, final_game) = play_game(&mut rng, random_plies)
            .with_context(|| format!("self-play game {} failed", index + 1))?;
        info!(
            game = index + 1,
            score = %outcome.score,
            stalemate = outcome.stalemate,
            "game finished"
        );
        debug!(board = %game::board_line(&final_game), "final position");
        summary.record(&outcome);
    }
    Ok(summary)
}

/// Plays one game to the end.
pub fn play_game<R: Rng + ?Sized>(
    rng: &mut R,
    random_plies: usize,
) -> Result<(Outcome, GameState)> {
    let mut game = GameState::new();
    let mut ply = 0;

    loop {
        if let Some(outcome) = game.outcome() {
            return Ok((outcome, game));
        }
        let color = game.side_to_move();
        let pos = if ply < random_plies {
            game.legal_moves()
                .iter()
                .copied()
                .choose(rng)
                .context("side to move has no legal move")?
        } else {
            choose_move(game.board(), color)
                .context("side to move has no legal move")?
                .position
        };
        game.play_move(pos)
            .with_context(|| format!("{color} could not play {pos}"))?;
        ply += 1;
    }
}

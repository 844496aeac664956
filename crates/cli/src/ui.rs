//! Interactive game loop: a human against the computer at a line prompt.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use othello_core::player::choose_move;
use othello_core::rating::rate_moves;
use othello_core::{Color, GameState, Position, Turn};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, info};

use crate::game;
use crate::parse::{Command, parse_command};

/// Settings of an interactive game.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub human: Color,
    /// Pause before a regular computer move.
    pub delay: Duration,
    /// Pause before the computer moves again after the human had to pass.
    pub pass_delay: Duration,
    /// Print every candidate rating before the computer moves.
    pub show_ratings: bool,
}

const HELP: &str = "\
Commands:
  <move>          play a move, e.g. c4 (several may be chained: f5d6)
  moves, m        list your legal moves
  hint, h         suggest a move
  undo, u         take back your last move
  new, n          start a new game
  quit, q         leave";

/// Main prompt loop.
///
/// The computer answers every human move after `delay`. Invalid input is
/// reported and the prompt continues.
pub fn ui_loop(opts: &PlayOptions) -> Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialize line editor")?;
    let mut game = GameState::new();
    let computer = opts.human.opposite();
    let mut delay = opts.delay;

    println!("You play {} ({}). Type 'help' for commands.\n", opts.human, opts.human.to_char());

    loop {
        game::print(&game);
        println!();

        match game.outcome() {
            Some(outcome) => {
                println!("{}", game::result_message(&outcome, opts.human));
                println!("Type 'new' to play again or 'quit' to leave.\n");
            }
            None if game.side_to_move() == computer => {
                thread::sleep(delay);
                let turn = computer_move(&mut game, opts.show_ratings)?;
                delay = opts.delay;
                if let Turn::Pass { passed, .. } = turn {
                    debug_assert_eq!(passed, opts.human);
                    println!("You have no moves. I move again.\n");
                    delay = opts.pass_delay;
                }
                continue;
            }
            None => {}
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        };
        let _ = rl.add_history_entry(line.as_str());
        println!();

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                println!("{msg}\n");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}\n"),
            Command::New => {
                info!("new game");
                game.reset();
            }
            Command::Undo => {
                if !undo_to_human(&mut game, opts.human) {
                    println!("Cannot undo.\n");
                }
            }
            Command::Moves => {
                let moves: Vec<String> = human_moves(&game, opts.human)
                    .iter()
                    .map(|pos| pos.to_string())
                    .collect();
                println!("Legal moves: {}\n", moves.join(" "));
            }
            Command::Hint => match choose_move(game.board(), opts.human) {
                Some(choice) if game.side_to_move() == opts.human => {
                    println!("Hint: {choice}\n");
                }
                _ => println!("No move to suggest.\n"),
            },
            Command::Play(moves) => play_human_moves(&mut game, opts.human, &moves),
        }
    }

    Ok(())
}

fn human_moves(game: &GameState, human: Color) -> Vec<Position> {
    if game.side_to_move() == human {
        game.legal_moves().as_slice().to_vec()
    } else {
        Vec::new()
    }
}

fn play_human_moves(game: &mut GameState, human: Color, moves: &[Position]) {
    for (i, &pos) in moves.iter().enumerate() {
        if game.is_game_over() || game.side_to_move() != human {
            println!("Ignoring {} remaining move(s).\n", moves.len() - i);
            return;
        }
        match game.play_move(pos) {
            Ok(Turn::Pass { .. }) => println!("I have no moves. Move again.\n"),
            Ok(_) => {}
            Err(err) => {
                println!("{err}\n");
                return;
            }
        }
    }
}

/// Undoes placements until it is the human's turn again.
fn undo_to_human(game: &mut GameState, human: Color) -> bool {
    if !game.undo() {
        return false;
    }
    while game.side_to_move() != human && game.undo() {}
    true
}

fn computer_move(game: &mut GameState, show_ratings: bool) -> Result<Turn> {
    let color = game.side_to_move();
    if show_ratings {
        for rating in rate_moves(game.board(), &game.legal_moves(), color) {
            println!("  {rating}");
        }
    }
    let choice = choose_move(game.board(), color).context("computer has no legal move")?;
    let turn = game
        .play_move(choice.position)
        .with_context(|| format!("computer move {} was rejected", choice.position))?;
    debug!(%choice, ?turn, "computer moved");
    println!("Computer plays {}\n", choice.position);
    Ok(turn)
}

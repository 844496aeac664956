//! Terminal rendering of a game in progress.

use std::fmt::Write;

use colored::Colorize;
use othello_core::{Color, GameState, Outcome, Position};

fn disk_symbol(color: Color) -> colored::ColoredString {
    match color {
        Color::Black => " X ".bright_green(),
        Color::White => " O ".bright_yellow(),
    }
}

/// Renders the board with legal-move markers, the last move and a side panel.
pub fn render(game: &GameState) -> String {
    let board = game.board();
    let side_to_move = game.side_to_move();
    let last_move = game.last_move();
    let legal = game.legal_moves();
    let score = game.score();

    let mut out = String::new();
    out.push_str("      a   b   c   d   e   f   g   h\n");
    out.push_str("    ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

    for row in 1..=8 {
        let _ = write!(out, "  {row} │");

        for col in 1..=8 {
            let pos = Position::from_coords(row, col);
            let is_last_move = Some(pos) == last_move;

            let symbol = match board.cell_state_at(pos).color() {
                Some(color) if is_last_move => disk_symbol(color).on_bright_black(),
                Some(color) => disk_symbol(color),
                None if legal.contains(pos) => " · ".bright_cyan(),
                None => "   ".normal(),
            };
            let _ = write!(out, "{symbol}│");
        }

        match row {
            3 if !game.is_game_over() => {
                let player_info = match side_to_move {
                    Color::Black => "Black's turn (X)".bright_green(),
                    Color::White => "White's turn (O)".bright_yellow(),
                };
                let _ = write!(out, "   {player_info}");
            }
            4 => {
                let _ = write!(out, "   Black: {}", format!("{:2}", score.black).bright_green());
            }
            5 => {
                let _ = write!(out, "   White: {}", format!("{:2}", score.white).bright_yellow());
            }
            7 => {
                if let Some(outcome) = game.outcome() {
                    let _ = write!(out, "   {}", winner_line(&outcome));
                }
            }
            8 => {
                if game.is_game_over() {
                    let _ = write!(out, "   {}", "*** Game Over ***".bright_red());
                }
            }
            _ => {}
        }
        out.push('\n');

        if row < 8 {
            out.push_str("    ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
        }
    }

    out.push_str("    └───┴───┴───┴───┴───┴───┴───┴───┘\n");
    out
}

fn winner_line(outcome: &Outcome) -> colored::ColoredString {
    match outcome.winner {
        Some(Color::Black) => "Black wins!".bright_green(),
        Some(Color::White) => "White wins!".bright_yellow(),
        None => "Draw".bright_cyan(),
    }
}

/// Prints a colored representation of the board to the terminal.
pub fn print(game: &GameState) {
    print!("{}", render(game));
}

/// The end-of-game message addressed to the human playing `human`.
pub fn result_message(outcome: &Outcome, human: Color) -> String {
    let mut msg = String::new();
    if outcome.stalemate {
        msg.push_str("Neither of us has moves. ");
    }
    match outcome.winner {
        Some(winner) if winner == human => msg.push_str("You won."),
        Some(_) => msg.push_str("You lost."),
        None => msg.push_str("A draw."),
    }
    msg
}

/// One-line text form of a board, `X`/`O`/`-` row by row.
pub fn board_line(game: &GameState) -> String {
    Position::iter()
        .map(|pos| game.board().cell_state_at(pos).to_char())
        .collect()
}

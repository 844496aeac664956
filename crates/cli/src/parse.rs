//! Parsing helpers for prompt input and command-line values.

use othello_core::{Board, Position};

/// A line entered at the game prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One or more moves, played in order.
    Play(Vec<Position>),
    Moves,
    Hint,
    Undo,
    New,
    Help,
    Quit,
}

/// Parses one prompt line.
///
/// Returns `Ok(None)` for a blank line. A word that is not a command is
/// read as a chain of moves such as `f5d6c3`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "moves" | "m" => Command::Moves,
        "hint" | "h" => Command::Hint,
        "undo" | "u" => Command::Undo,
        "new" | "n" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        "play" | "p" => {
            let chain = parts.next().ok_or("Usage: play <moves>")?;
            Command::Play(parse_moves(chain)?)
        }
        _ => {
            let moves = parse_moves(word).map_err(|_| format!("Unknown command: {word}"))?;
            Command::Play(moves)
        }
    };
    Ok(Some(command))
}

/// Splits a chain like `f5d6` into positions, two characters per move.
fn parse_moves(chain: &str) -> Result<Vec<Position>, String> {
    let chars: Vec<char> = chain.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(format!("Moves are two characters each: '{chain}'"));
    }
    chars
        .chunks(2)
        .map(|pair| {
            let text: String = pair.iter().collect();
            text.parse::<Position>()
                .map_err(|err| format!("Bad move '{text}': {err}"))
        })
        .collect()
}

/// Parses a 64-cell board string made of `X`, `O` and `-` (or `.`).
///
/// Whitespace is ignored so rows may be separated.
pub fn parse_board(input: &str) -> Result<Board, String> {
    let cells: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(bad) = cells
        .chars()
        .find(|c| !matches!(c, 'X' | 'x' | 'O' | 'o' | '-' | '.'))
    {
        return Err(format!("Invalid cell character: '{bad}'"));
    }
    let count = cells.chars().count();
    if count != 64 {
        return Err(format!("Board must have 64 cells, got {count}"));
    }
    Ok(Board::from_string(&cells.to_ascii_uppercase()))
}

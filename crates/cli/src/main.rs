mod game;
mod parse;
mod selfplay;
mod ui;

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use othello_core::rating::rate_moves;
use othello_core::{Color, find_legal_moves};
use tracing_subscriber::EnvFilter;

#[derive(Args, Debug, Clone)]
struct PlayArgs {
    /// Color played by the human (black moves first)
    #[arg(long, default_value = "black")]
    color: Color,

    /// Milliseconds the computer waits before moving
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Milliseconds the computer waits before moving again after you pass
    #[arg(long, default_value_t = 1500)]
    pass_delay_ms: u64,

    /// Print the rating of every candidate before the computer moves
    #[arg(long)]
    show_ratings: bool,
}

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Othello against a pattern-rating computer")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    play_args: PlayArgs,

    /// Log filter, e.g. "debug" or "othello_core=trace" (defaults to RUST_LOG, then "warn")
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play against the computer (default)
    Play {
        #[command(flatten)]
        play_args: PlayArgs,
    },
    /// Rate every legal move on a board
    Rate {
        /// 64 cells from a1 to h8 using X, O and - (whitespace ignored)
        #[arg(long)]
        board: String,

        /// Color to rate the moves for
        #[arg(long)]
        color: Color,
    },
    /// Let the computer play against itself
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,

        /// Uniformly random plies at the start of each game
        #[arg(long, default_value_t = 0)]
        random_plies: usize,

        /// Seed for the random opening plies
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_level.as_deref())?;

    match args.command {
        Some(SubCommands::Play { play_args }) => play(&play_args),
        Some(SubCommands::Rate { board, color }) => rate(&board, color),
        Some(SubCommands::Selfplay {
            games,
            random_plies,
            seed,
        }) => {
            let summary = selfplay::run(games, random_plies, seed)?;
            println!("{summary}");
            Ok(())
        }
        None => play(&args.play_args),
    }
}

fn init_tracing(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter '{directives}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn play(args: &PlayArgs) -> Result<()> {
    let opts = ui::PlayOptions {
        human: args.color,
        delay: Duration::from_millis(args.delay_ms),
        pass_delay: Duration::from_millis(args.pass_delay_ms),
        show_ratings: args.show_ratings,
    };
    ui::ui_loop(&opts)
}

fn rate(board: &str, color: Color) -> Result<()> {
    let board = parse::parse_board(board).map_err(|e| anyhow!("invalid --board: {e}"))?;
    println!("{board}\n");

    let moves = find_legal_moves(&board, color);
    if moves.is_empty() {
        println!("{color} has no legal moves");
        return Ok(());
    }
    for rating in rate_moves(&board, &moves, color) {
        println!("{rating}");
    }
    Ok(())
}

mod client;
mod engine;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::{info, LevelFilter};

use client::TextController;
use engine::prelude::*;

/// Play a game of Solo Red in the terminal.
#[derive(Parser, Debug)]
#[command(name = "solo_red")]
#[command(version)]
struct Cli {
    /// Rule set to play: `basic` or `advanced`
    variant: String,

    /// Number of palettes, the player's included
    #[arg(default_value_t = 4)]
    num_palettes: usize,

    /// Maximum number of cards in hand
    #[arg(default_value_t = 7)]
    hand_size: usize,

    /// Seed the shuffle for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,

    /// Deal the deck in its canonical order
    #[arg(long)]
    no_shuffle: bool,

    /// Write a debug log to this file instead of warnings to stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match &cli.log_file {
        Some(path) => simple_logging::log_to_file(path, LevelFilter::Debug)?,
        None => simple_logging::log_to_stderr(LevelFilter::Warn),
    }

    let game_type: GameType = cli.variant.parse()?;
    info!("Creating a {game_type:?} game");
    let mut model = match cli.seed {
        Some(seed) => GameCreator::create_seeded(game_type, seed),
        None => GameCreator::create(game_type),
    };
    let deck = model.all_cards();

    let stdin = io::stdin();
    let stdout = io::stdout();
    TextController::new(stdin.lock(), stdout.lock()).play_game(
        model.as_mut(),
        deck,
        !cli.no_shuffle,
        cli.num_palettes,
        cli.hand_size,
    )
}

use std::error::Error;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use mimalloc::MiMalloc;
use tictactoe::Player;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod analysis;
mod pit;
mod play;

const PIT_GAMES: u32 = 100;

/// Tic-tac-toe minimax engine
#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
    /// Log level (off, error, warn, info, debug, trace)
    #[clap(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
    /// Write logs to this file instead of stderr
    #[clap(long)]
    log_file: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the engine
    Play {
        /// Side to play as against the engine
        #[clap(long, default_value_t = Player::X)]
        human: Player,
    },
    /// Show the engine's move for a position, e.g. "X--/-O-/---"
    Best {
        /// Board rows top to bottom separated by '/', cells X, O or -
        board: String,
    },
    /// Let the engine play both sides
    SelfPlay,
    /// Play the engine against a random mover
    Pit {
        /// Rounds to play, each round is one game per side
        #[clap(short, long, default_value_t = PIT_GAMES)]
        games: u32,
        /// Seed for the random mover
        #[clap(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, args.log_level)?,
        None => simple_logging::log_to_stderr(args.log_level),
    }

    match args.command {
        Command::Play { human } => play::play(human),
        Command::Best { board } => analysis::best(&board),
        Command::SelfPlay => analysis::self_play(),
        Command::Pit { games, seed } => {
            let results = pit::pit(games, seed)?;
            println!("{results}");
            Ok(())
        }
    }
}

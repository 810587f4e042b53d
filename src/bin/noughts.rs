//! noughts CLI - tic-tac-toe with a rewindable move history
//!
//! - `play`: interactive game on stdin/stdout
//! - `replay`: apply a script of moves and show the final position

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with a rewindable move history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(noughts::cli::commands::play::PlayArgs),

    /// Replay a script of moves and show the final position
    Replay(noughts::cli::commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            noughts::cli::logging::init_tracing(args.common.verbose);
            noughts::cli::commands::play::execute(args)
        }
        Commands::Replay(args) => {
            noughts::cli::logging::init_tracing(args.common.verbose);
            noughts::cli::commands::replay::execute(args)
        }
    }
}

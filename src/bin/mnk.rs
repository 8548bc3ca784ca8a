//! mnk CLI - train, evaluate, and play the generalized m,n,k-game

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mnk")]
#[command(version, about = "m,n,k-game with reinforcement-learning players", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train an agent against an opponent
    Train(mnk::cli::commands::train::TrainArgs),

    /// Compare two agent types with exploration frozen
    Evaluate(mnk::cli::commands::evaluate::EvaluateArgs),

    /// Play against an agent on the console
    Play(mnk::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => mnk::cli::commands::train::execute(args),
        Commands::Evaluate(args) => mnk::cli::commands::evaluate::execute(args),
        Commands::Play(args) => mnk::cli::commands::play::execute(args),
    }
}

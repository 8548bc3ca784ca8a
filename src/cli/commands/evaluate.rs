//! Evaluate command - frozen-exploration comparison of two agent types

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        commands::{build_agent, game_config},
        output,
    },
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
};

#[derive(Parser, Debug)]
#[command(about = "Compare two agent types with exploration frozen")]
pub struct EvaluateArgs {
    /// First agent (random, mc, td)
    #[arg(long, short = 'a', default_value = "td")]
    pub agent: String,

    /// Second agent (random, mc, td)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 1_000)]
    pub games: usize,

    /// Training games played before freezing exploration
    #[arg(long, default_value_t = 50_000)]
    pub train_games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board rows (N)
    #[arg(long, default_value_t = 3)]
    pub rows: usize,

    /// Board columns (M)
    #[arg(long, default_value_t = 3)]
    pub cols: usize,

    /// Winning line length (K)
    #[arg(long, default_value_t = 3)]
    pub win_len: usize,

    /// Write the evaluation summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let game = game_config(args.rows, args.cols, args.win_len, false)?;
    let mut agent = build_agent(&args.agent)?;
    let mut opponent = build_agent(&args.opponent)?;

    if args.train_games > 0 {
        println!(
            "Pre-training {} vs {} for {} games...",
            agent.name(),
            opponent.name(),
            output::format_number(args.train_games)
        );
        let train_config = TrainingConfig {
            games: args.train_games,
            seed: args.seed,
            alternate_first: true,
            game: game.clone(),
        };
        TrainingPipeline::new(train_config)
            .with_observer(Box::new(ProgressObserver::new()))
            .run(agent.as_mut(), opponent.as_mut())?;
    }

    agent.set_exploration(0.0);
    opponent.set_exploration(0.0);

    let eval_config = TrainingConfig {
        games: args.games,
        seed: args.seed.map(|s| s.wrapping_add(100)),
        alternate_first: true,
        game,
    };
    let result = TrainingPipeline::new(eval_config).run(agent.as_mut(), opponent.as_mut())?;

    output::print_section(&format!(
        "Evaluation: {} vs {}",
        agent.name(),
        opponent.name()
    ));
    output::print_match_summary(agent.name(), opponent.name(), &result);

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

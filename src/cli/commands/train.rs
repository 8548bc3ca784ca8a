//! Train command - train two agents against each other

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
#[command(about = "Train an agent through repeated games")]
pub struct TrainArgs {
    /// Agent to train (random, mc, td)
    #[arg(long, short = 'a', default_value = "td")]
    pub agent: String,

    /// Opponent the agent trains against (random, mc, td)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 50_000)]
    pub games: usize,

    /// Number of exploration-frozen evaluation games after training
    #[arg(long, default_value_t = 1_000)]
    pub eval_games: usize,

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

pub fn execute(args: TrainArgs) -> Result<()> {
    let game = game_config(args.rows, args.cols, args.win_len, false)?;
    let mut agent = build_agent(&args.agent)?;
    let mut opponent = build_agent(&args.opponent)?;

    output::print_section(&format!(
        "Training: {} vs {} on {}x{} (K={})",
        agent.name(),
        opponent.name(),
        args.rows,
        args.cols,
        args.win_len
    ));

    let config = TrainingConfig {
        games: args.games,
        seed: args.seed,
        alternate_first: true,
        game: game.clone(),
    };
    let result = TrainingPipeline::new(config)
        .with_observer(Box::new(ProgressObserver::new()))
        .run(agent.as_mut(), opponent.as_mut())?;

    output::print_match_summary(agent.name(), opponent.name(), &result);

    if args.eval_games > 0 {
        output::print_section("Evaluation (exploration frozen)");
        agent.set_exploration(0.0);
        opponent.set_exploration(0.0);

        let eval_config = TrainingConfig {
            games: args.eval_games,
            seed: args.seed.map(|s| s.wrapping_add(100)),
            alternate_first: true,
            game,
        };
        let eval_result =
            TrainingPipeline::new(eval_config).run(agent.as_mut(), opponent.as_mut())?;
        output::print_match_summary(agent.name(), opponent.name(), &eval_result);

        if let Some(path) = &args.export {
            eval_result.save(path)?;
            println!("\nSummary written to {}", path.display());
        }
    } else if let Some(path) = &args.export {
        result.save(path)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

//! Play command - interactive game against an agent

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        commands::{build_agent, game_config},
        output,
    },
    game::Engine,
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
    players::{HumanPlayer, RandomPlayer},
};

#[derive(Parser, Debug)]
#[command(about = "Play against an agent on the console")]
pub struct PlayArgs {
    /// Opponent agent (random, mc, td)
    #[arg(long, short = 'o', default_value = "td")]
    pub opponent: String,

    /// Self-play games against a random sparring partner before the
    /// match (skipped for the random opponent)
    #[arg(long, default_value_t = 20_000)]
    pub train_games: usize,

    /// Number of games to play; who opens alternates between games
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// The agent opens the first game instead of the human
    #[arg(long, default_value_t = false)]
    pub agent_first: bool,

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
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut agent = build_agent(&args.opponent)?;

    if args.train_games > 0 && args.opponent != "random" {
        println!(
            "Preparing {} with {} training games...",
            agent.name(),
            output::format_number(args.train_games)
        );
        let train_config = TrainingConfig {
            games: args.train_games,
            seed: args.seed,
            alternate_first: true,
            game: game_config(args.rows, args.cols, args.win_len, false)?,
        };
        let mut sparring = RandomPlayer::new();
        TrainingPipeline::new(train_config)
            .with_observer(Box::new(ProgressObserver::new()))
            .run(agent.as_mut(), &mut sparring)?;
        agent.set_exploration(0.0);
    }

    let mut human = HumanPlayer::new();
    let mut engine = Engine::new(game_config(args.rows, args.cols, args.win_len, true)?)?;

    for game_num in 0..args.games {
        let human_opens = (game_num % 2 == 0) != args.agent_first;
        if human_opens {
            engine.play(&mut human, agent.as_mut())?;
        } else {
            engine.play(agent.as_mut(), &mut human)?;
        }
    }

    Ok(())
}

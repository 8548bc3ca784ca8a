//! CLI command implementations

pub mod evaluate;
pub mod play;
pub mod train;

use anyhow::bail;

use crate::{
    game::GameConfig,
    players::{MonteCarloPlayer, Player, RandomPlayer, TdPlayer},
};

/// Build a player from its CLI token.
///
/// The neural player is not constructible here: its function
/// approximator is an injected library-level capability with no default
/// implementation in this crate.
pub(crate) fn build_agent(kind: &str) -> anyhow::Result<Box<dyn Player>> {
    match kind {
        "random" => Ok(Box::new(RandomPlayer::new())),
        "mc" | "monte-carlo" => Ok(Box::new(MonteCarloPlayer::new())),
        "td" => Ok(Box::new(TdPlayer::new())),
        other => bail!("unknown agent type '{other}' (expected: random, mc, td)"),
    }
}

pub(crate) fn game_config(
    rows: usize,
    cols: usize,
    win_len: usize,
    verbose: bool,
) -> anyhow::Result<GameConfig> {
    let config = GameConfig {
        rows,
        cols,
        win_len,
        verbose,
    };
    config.validate()?;
    Ok(config)
}

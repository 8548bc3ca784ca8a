//! Observers for monitoring training runs

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, error::Error, game::GameOutcome};

/// Observer trait for monitoring a training run
///
/// Observers are composed onto a [`super::TrainingPipeline`] and receive
/// events in order: `on_training_start` once, `on_game_end` per game,
/// `on_training_end` once.
pub trait Observer {
    fn on_training_start(&mut self, total_games: usize) -> Result<()>;

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()>;

    fn on_training_end(&mut self) -> Result<()>;
}

/// Progress bar observer for console feedback
pub struct ProgressObserver {
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self { bar: None }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let bar = ProgressBar::new(total_games as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
            .map_err(|e| Error::ProgressBarTemplate {
                message: e.to_string(),
            })?
            .progress_chars("=>-");
        bar.set_style(style);
        self.bar = Some(bar);
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
        Ok(())
    }
}

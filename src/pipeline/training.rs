//! Serial match runner for training and evaluation

use serde::{Deserialize, Serialize};

use super::observers::Observer;
use crate::{
    Result,
    game::{Engine, GameConfig, GameOutcome, Mark},
    players::Player,
};

/// Match-runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed threaded into both players (opponent gets seed + 1)
    pub seed: Option<u64>,

    /// Alternate which player opens each game, to cancel first-mover
    /// bias. Runner policy, not an engine concern.
    pub alternate_first: bool,

    /// Board dimensions and rules
    pub game: GameConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            games: 500,
            seed: None,
            alternate_first: true,
            game: GameConfig::default(),
        }
    }
}

/// Win/draw/loss tally of a completed run, counted per passed-in player
/// (independent of which mark each held in a given game)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    pub total_games: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub draws: usize,
    pub win_rate_a: f64,
    pub win_rate_b: f64,
    pub draw_rate: f64,
}

impl TrainingResult {
    pub fn new(total_games: usize, wins_a: usize, wins_b: usize, draws: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };
        Self {
            total_games,
            wins_a,
            wins_b,
            draws,
            win_rate_a: rate(wins_a),
            win_rate_b: rate(wins_b),
            draw_rate: rate(draws),
        }
    }

    /// Save result to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays games serially between two players, attributing outcomes and
/// notifying observers.
///
/// Exactly one game is active at a time; the learning signal reaches
/// players only through the engine's `end_of_game` broadcast.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the configured number of games between `a` and `b`
    pub fn run(&mut self, a: &mut dyn Player, b: &mut dyn Player) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            a.set_rng_seed(seed);
            b.set_rng_seed(seed.wrapping_add(1));
        }

        let mut engine = Engine::new(self.config.game.clone())?;
        let mut wins_a = 0;
        let mut wins_b = 0;
        let mut draws = 0;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.games)?;
        }

        for game_num in 0..self.config.games {
            let a_opens = !self.config.alternate_first || game_num % 2 == 0;
            let outcome = if a_opens {
                engine.play(&mut *a, &mut *b)?
            } else {
                engine.play(&mut *b, &mut *a)?
            };

            // X always opened, so map the winning mark back to a or b
            match outcome {
                GameOutcome::Win(Mark::X) if a_opens => wins_a += 1,
                GameOutcome::Win(Mark::O) if a_opens => wins_b += 1,
                GameOutcome::Win(Mark::X) => wins_b += 1,
                GameOutcome::Win(Mark::O) => wins_a += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(
            self.config.games,
            wins_a,
            wins_b,
            draws,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::RandomPlayer;

    #[test]
    fn test_pipeline_counts_every_game() {
        let config = TrainingConfig {
            games: 20,
            seed: Some(42),
            ..TrainingConfig::default()
        };

        let mut pipeline = TrainingPipeline::new(config);
        let mut a = RandomPlayer::new();
        let mut b = RandomPlayer::new();

        let result = pipeline.run(&mut a, &mut b).unwrap();
        assert_eq!(result.total_games, 20);
        assert_eq!(result.wins_a + result.wins_b + result.draws, 20);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = || {
            let config = TrainingConfig {
                games: 30,
                seed: Some(7),
                ..TrainingConfig::default()
            };
            let mut pipeline = TrainingPipeline::new(config);
            let mut a = RandomPlayer::new();
            let mut b = RandomPlayer::new();
            pipeline.run(&mut a, &mut b).unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(first.wins_a, second.wins_a);
        assert_eq!(first.wins_b, second.wins_b);
        assert_eq!(first.draws, second.draws);
    }

    #[test]
    fn test_rates_sum_to_one() {
        let result = TrainingResult::new(10, 4, 3, 3);
        let total = result.win_rate_a + result.win_rate_b + result.draw_rate;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_run_has_zero_rates() {
        let result = TrainingResult::new(0, 0, 0, 0);
        assert_eq!(result.win_rate_a, 0.0);
        assert_eq!(result.draw_rate, 0.0);
    }
}

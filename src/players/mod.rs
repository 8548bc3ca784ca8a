//! Player capability and its concrete variants
//!
//! The engine only knows the [`Player`] trait; human input, random
//! baselines, and the learning agents are interchangeable adapters
//! behind it. Players never talk to each other directly: the only
//! cross-player signal is the engine-broadcast `end_of_game`.

pub mod human;
pub mod monte_carlo;
pub mod neural;
pub mod random;
pub mod td;

use rand::{SeedableRng, rngs::StdRng};

pub use human::HumanPlayer;
pub use monte_carlo::MonteCarloPlayer;
pub use neural::{NeuralPlayer, ValueNetwork};
pub use random::RandomPlayer;
pub use td::TdPlayer;

use crate::{
    Result,
    game::{Board, GameOutcome, Mark},
};

/// Seed for unvisited value-table entries
pub const INITIAL_VALUE: f64 = 0.5;

/// Terminal reward for a won game
pub const WIN_REWARD: f64 = 1.0;

/// Terminal reward for a lost game
pub const LOSS_REWARD: f64 = 0.0;

/// Terminal reward for a drawn game
pub const DRAW_REWARD: f64 = 0.5;

/// Player trait - unified interface consumed by the engine
///
/// Implementations may block (human input) or return immediately. A
/// returned move is raw `(row, col)` input: the engine validates it and
/// re-prompts the same player on rejection, so implementations are free
/// to emit out-of-range values (human typos) without breaking the game.
pub trait Player {
    /// Assign this player's mark. Called once per game before the first
    /// move, so state encodings can distinguish own cells from the
    /// opponent's.
    fn assign_mark(&mut self, mark: Mark);

    /// Produce the next raw (row, col) move for the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no free cells, the input
    /// stream is closed (human), or the function approximator fails
    /// (neural).
    fn select_move(&mut self, board: &Board) -> Result<(i64, i64)>;

    /// Notification that the game ended; called exactly once per game.
    ///
    /// Learning agents propagate the terminal reward and clear their
    /// per-game state here.
    fn end_of_game(&mut self, outcome: GameOutcome) -> Result<()>;

    /// Name used in summaries and logging
    fn name(&self) -> &str;

    /// Override the exploration rate (0.0 freezes the policy for
    /// evaluation). No-op for players without an exploration knob.
    fn set_exploration(&mut self, _epsilon: f64) {}

    /// Reseed the player's internal RNG for reproducible runs. No-op
    /// for deterministic players.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

/// Convert a broadcast outcome into this player's scalar reward
pub(crate) fn terminal_reward(outcome: GameOutcome, me: Mark) -> f64 {
    match outcome {
        GameOutcome::Win(winner) if winner == me => WIN_REWARD,
        GameOutcome::Win(_) => LOSS_REWARD,
        GameOutcome::Draw => DRAW_REWARD,
    }
}

pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

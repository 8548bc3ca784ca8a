//! Random baseline player

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::{Player, build_rng};
use crate::{
    Result,
    error::Error,
    game::{Board, GameOutcome, Mark},
};

/// Picks uniformly at random over the free cells.
///
/// Carries no state across calls beyond its RNG; used as a training and
/// evaluation baseline opponent.
pub struct RandomPlayer {
    mark: Option<Mark>,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            mark: None,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            mark: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn assign_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
    }

    fn select_move(&mut self, board: &Board) -> Result<(i64, i64)> {
        let free = board.free_cells();
        let cell = free.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
        Ok((cell.row as i64, cell.col as i64))
    }

    fn end_of_game(&mut self, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

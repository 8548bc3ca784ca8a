//! Tabular state-value agent with a TD(0) update rule

use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::{INITIAL_VALUE, Player, build_rng, terminal_reward};
use crate::{
    Result,
    encoding::{self, StateKey},
    error::Error,
    game::{Board, Coord, GameOutcome, Mark},
};

/// Tabular player that bootstraps between successive post-move states.
///
/// The value table maps post-move encoded states to scalar estimates.
/// During play each decision immediately pulls the previous post-move
/// state toward the value of the state being moved into:
///
/// `V(prev) += alpha * (V(next) - V(prev))`
///
/// and the game-end notification applies one final update toward the
/// terminal reward. Only the single most recent post-move state is
/// remembered, not a full history; the credit-assignment semantics are
/// deliberately different from [`super::MonteCarloPlayer`].
pub struct TdPlayer {
    mark: Option<Mark>,
    alpha: f64,
    epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    values: HashMap<StateKey, f64>,
    prev: Option<StateKey>,
    rng: StdRng,
}

impl TdPlayer {
    /// Create a player with the defaults used for training
    pub fn new() -> Self {
        Self::with_params(0.99, 1.0, 0.9999, 0.0)
    }

    /// * `alpha` - step size (0, 1]
    /// * `epsilon` - initial exploration probability [0, 1]
    /// * `epsilon_decay` - multiplicative decay applied after each
    ///   exploratory pick
    /// * `min_epsilon` - floor the decay never crosses
    pub fn with_params(alpha: f64, epsilon: f64, epsilon_decay: f64, min_epsilon: f64) -> Self {
        Self {
            mark: None,
            alpha,
            epsilon,
            epsilon_decay,
            min_epsilon,
            values: HashMap::new(),
            prev: None,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn table_size(&self) -> usize {
        self.values.len()
    }

    pub fn value_of(&self, state: &StateKey) -> Option<f64> {
        self.values.get(state).copied()
    }

    fn require_mark(&self) -> Result<Mark> {
        self.mark.ok_or_else(|| Error::MarkUnassigned {
            player: self.name().to_string(),
        })
    }

    /// Seed the current state, then each one-move successor (the
    /// explicit two-step procedure; no recursion involved)
    fn seed_values(&mut self, board: &Board, me: Mark) {
        self.values
            .entry(encoding::encode(board, me))
            .or_insert(INITIAL_VALUE);
        for cell in board.free_cells() {
            self.values
                .entry(encoding::encode_with_move(board, me, cell))
                .or_insert(INITIAL_VALUE);
        }
    }

    fn lookahead_value(&self, board: &Board, me: Mark, cell: Coord) -> Result<f64> {
        let key = encoding::encode_with_move(board, me, cell);
        self.values
            .get(&key)
            .copied()
            .ok_or_else(|| Error::MissingValueEntry {
                state: key.to_string(),
            })
    }

    /// Move whose resulting state has the highest value, ties broken by
    /// first encounter in row-major order
    fn greedy_move(&self, board: &Board, me: Mark, free: &[Coord]) -> Result<Coord> {
        let mut best: Option<(Coord, f64)> = None;
        for &cell in free {
            let value = self.lookahead_value(board, me, cell)?;
            match best {
                Some((_, score)) if value <= score => {}
                _ => best = Some((cell, value)),
            }
        }
        best.map(|(cell, _)| cell).ok_or(Error::NoValidMoves)
    }

    /// `V(prev) += alpha * (target - V(prev))`
    fn update_prev(&mut self, target: f64) -> Result<()> {
        if let Some(prev) = &self.prev {
            let value = self
                .values
                .get_mut(prev)
                .ok_or_else(|| Error::MissingValueEntry {
                    state: prev.to_string(),
                })?;
            *value += self.alpha * (target - *value);
        }
        Ok(())
    }

    fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }
}

impl Default for TdPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for TdPlayer {
    fn assign_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
    }

    fn select_move(&mut self, board: &Board) -> Result<(i64, i64)> {
        let me = self.require_mark()?;
        self.seed_values(board, me);

        let free = board.free_cells();
        if free.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let cell = if self.rng.random::<f64>() < self.epsilon {
            let cell = *free.choose(&mut self.rng).unwrap();
            self.decay_epsilon();
            cell
        } else {
            self.greedy_move(board, me, &free)?
        };

        // Bootstrap toward the state we are about to move into
        let target = self.lookahead_value(board, me, cell)?;
        self.update_prev(target)?;
        self.prev = Some(encoding::encode_with_move(board, me, cell));

        Ok((cell.row as i64, cell.col as i64))
    }

    fn end_of_game(&mut self, outcome: GameOutcome) -> Result<()> {
        let me = self.require_mark()?;
        self.update_prev(terminal_reward(outcome, me))?;
        self.prev = None;
        Ok(())
    }

    fn name(&self) -> &str {
        "TD(0)"
    }

    fn set_exploration(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_seeding_covers_state_and_all_successors() {
        let mut player = TdPlayer::with_params(0.5, 0.0, 1.0, 0.0).with_seed(5);
        player.assign_mark(Mark::X);
        let board = Board::new(3, 3);
        player.seed_values(&board, Mark::X);

        // Empty state plus nine one-move successors
        assert_eq!(player.table_size(), 10);
        assert_relative_eq!(
            player
                .value_of(&encoding::encode_with_move(&board, Mark::X, Coord::new(1, 1)))
                .unwrap(),
            INITIAL_VALUE
        );
    }

    #[test]
    fn test_in_game_bootstrap_update() {
        let mut player = TdPlayer::with_params(0.5, 0.0, 1.0, 0.0).with_seed(5);
        player.assign_mark(Mark::X);

        // First move from the empty board establishes prev with V = 0.5
        let mut board = Board::new(3, 3);
        let (r, c) = player.select_move(&board).unwrap();
        let prev_key = encoding::encode_with_move(&board, Mark::X, Coord::new(r as usize, c as usize));
        board.place(Coord::new(r as usize, c as usize), Mark::X).unwrap();
        board.place(Coord::new(2, 2), Mark::O).unwrap();

        // Make one successor clearly best: V(next) = 0.8
        let next_key = encoding::encode_with_move(&board, Mark::X, Coord::new(0, 1));
        player.seed_values(&board, Mark::X);
        player.values.insert(next_key.clone(), 0.8);

        let (r2, c2) = player.select_move(&board).unwrap();
        assert_eq!((r2, c2), (0, 1));

        // V(prev) = 0.5 + 0.5 * (0.8 - 0.5) = 0.65
        assert_relative_eq!(player.value_of(&prev_key).unwrap(), 0.65);
        assert_eq!(player.prev.as_ref(), Some(&next_key));
    }

    #[test]
    fn test_terminal_update_and_reset() {
        let mut player = TdPlayer::with_params(0.5, 0.0, 1.0, 0.0).with_seed(5);
        player.assign_mark(Mark::X);

        let board = Board::new(3, 3);
        let (r, c) = player.select_move(&board).unwrap();
        let prev_key = encoding::encode_with_move(&board, Mark::X, Coord::new(r as usize, c as usize));

        player.end_of_game(GameOutcome::Win(Mark::X)).unwrap();

        // V(prev) = 0.5 + 0.5 * (1.0 - 0.5) = 0.75, prev cleared
        assert_relative_eq!(player.value_of(&prev_key).unwrap(), 0.75);
        assert!(player.prev.is_none());

        // A loss pulls the estimate back down toward 0.0
        player.select_move(&board).unwrap();
        player.end_of_game(GameOutcome::Win(Mark::O)).unwrap();
        assert!(player.value_of(&prev_key).unwrap() < 0.75);
    }

    #[test]
    fn test_end_of_game_without_moves_is_a_no_op() {
        let mut player = TdPlayer::with_params(0.5, 0.0, 1.0, 0.0).with_seed(5);
        player.assign_mark(Mark::O);
        player.end_of_game(GameOutcome::Draw).unwrap();
        assert_eq!(player.table_size(), 0);
    }

    #[test]
    fn test_epsilon_never_drops_below_floor() {
        let mut player = TdPlayer::with_params(0.5, 1.0, 0.1, 0.05).with_seed(5);
        player.assign_mark(Mark::X);
        let board = Board::new(3, 3);
        for _ in 0..5 {
            player.select_move(&board).unwrap();
            player.end_of_game(GameOutcome::Draw).unwrap();
        }
        // The first pick always explores at epsilon 1.0; every further
        // decay is clamped at the floor
        assert!(player.epsilon() <= 0.1);
        assert!(player.epsilon() >= 0.05);
    }
}

//! Function-approximation player
//!
//! Same epsilon-greedy policy shape as the TD player, but value lookup
//! and updates are delegated to an injected [`ValueNetwork`]. The
//! network's internal architecture is out of scope here; the player only
//! relies on the evaluate/update capability.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::{Player, build_rng, terminal_reward};
use crate::{
    Result,
    encoding::{self, PlaneState},
    error::Error,
    game::{Board, Coord, GameOutcome, Mark},
};

/// Function-approximator capability consumed by [`NeuralPlayer`].
///
/// `evaluate` returns one action-value per board cell (row-major) for
/// the given two-plane state; `update` applies one gradient step pushing
/// the masked action-values of each state toward its scalar target.
/// Failures are fatal to the caller; the player has no fallback policy.
pub trait ValueNetwork {
    fn evaluate(&mut self, state: &PlaneState) -> Result<Vec<f64>>;

    fn update(
        &mut self,
        states: &[PlaneState],
        action_masks: &[Vec<f64>],
        targets: &[f64],
    ) -> Result<()>;
}

/// One remembered transition awaiting its bootstrapped target
struct PendingTransition {
    state: PlaneState,
    action_mask: Vec<f64>,
}

/// Player that learns a value function through an external approximator
/// with one-step TD targets discounted by `gamma`.
pub struct NeuralPlayer<N: ValueNetwork> {
    network: N,
    mark: Option<Mark>,
    epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    gamma: f64,
    prev: Option<PendingTransition>,
    rng: StdRng,
}

impl<N: ValueNetwork> NeuralPlayer<N> {
    /// Create a player with full initial exploration
    pub fn new(network: N) -> Self {
        Self::with_params(network, 1.0, 0.9999, 0.0, 0.999)
    }

    pub fn with_params(
        network: N,
        epsilon: f64,
        epsilon_decay: f64,
        min_epsilon: f64,
        gamma: f64,
    ) -> Self {
        Self {
            network,
            mark: None,
            epsilon,
            epsilon_decay,
            min_epsilon,
            gamma,
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

    pub fn network(&self) -> &N {
        &self.network
    }

    fn require_mark(&self) -> Result<Mark> {
        self.mark.ok_or_else(|| Error::MarkUnassigned {
            player: self.name().to_string(),
        })
    }

    /// Push the pending transition one step toward `target`
    fn update_prev(&mut self, target: f64) -> Result<()> {
        if let Some(prev) = self.prev.take() {
            self.network
                .update(&[prev.state], &[prev.action_mask], &[target])?;
        }
        Ok(())
    }

    fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }
}

impl<N: ValueNetwork> Player for NeuralPlayer<N> {
    fn assign_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
    }

    fn select_move(&mut self, board: &Board) -> Result<(i64, i64)> {
        let me = self.require_mark()?;
        let planes = encoding::split_planes(board, me);

        let values = self.network.evaluate(&planes)?;
        if values.len() != planes.cell_count() {
            return Err(Error::Approximator {
                message: format!(
                    "expected {} action-values, got {}",
                    planes.cell_count(),
                    values.len()
                ),
            });
        }

        let free = board.free_cells();
        if free.is_empty() {
            return Err(Error::NoValidMoves);
        }

        // Greedy argmax over legal moves only
        let mut best: Option<(Coord, f64)> = None;
        for &cell in &free {
            let value = values[cell.row * board.cols() + cell.col];
            match best {
                Some((_, score)) if value <= score => {}
                _ => best = Some((cell, value)),
            }
        }
        let (best_cell, best_value) = best.ok_or(Error::NoValidMoves)?;

        let cell = if self.rng.random::<f64>() < self.epsilon {
            let cell = *free.choose(&mut self.rng).unwrap();
            self.decay_epsilon();
            cell
        } else {
            best_cell
        };

        // Bootstrap the previous transition toward the discounted best
        // value of the state now faced
        self.update_prev(self.gamma * best_value)?;

        let mut action_mask = vec![0.0; planes.cell_count()];
        action_mask[cell.row * board.cols() + cell.col] = 1.0;
        self.prev = Some(PendingTransition {
            state: planes,
            action_mask,
        });

        Ok((cell.row as i64, cell.col as i64))
    }

    fn end_of_game(&mut self, outcome: GameOutcome) -> Result<()> {
        let me = self.require_mark()?;
        // Terminal reward is undiscounted
        self.update_prev(terminal_reward(outcome, me))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "Neural"
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

    /// Returns a fixed value grid and records every update call
    struct FakeNetwork {
        grid: Vec<f64>,
        updates: Vec<(Vec<f64>, f64)>,
    }

    impl FakeNetwork {
        fn with_grid(grid: Vec<f64>) -> Self {
            Self {
                grid,
                updates: Vec::new(),
            }
        }
    }

    impl ValueNetwork for FakeNetwork {
        fn evaluate(&mut self, _state: &PlaneState) -> Result<Vec<f64>> {
            Ok(self.grid.clone())
        }

        fn update(
            &mut self,
            _states: &[PlaneState],
            action_masks: &[Vec<f64>],
            targets: &[f64],
        ) -> Result<()> {
            for (mask, &target) in action_masks.iter().zip(targets) {
                self.updates.push((mask.clone(), target));
            }
            Ok(())
        }
    }

    fn greedy_player(grid: Vec<f64>) -> NeuralPlayer<FakeNetwork> {
        let mut player =
            NeuralPlayer::with_params(FakeNetwork::with_grid(grid), 0.0, 1.0, 0.0, 0.9)
                .with_seed(11);
        player.assign_mark(Mark::X);
        player
    }

    #[test]
    fn test_greedy_argmax_is_masked_to_legal_moves() {
        // Highest raw value sits on an occupied cell and must be skipped
        let mut board = Board::new(3, 3);
        board.place(Coord::new(0, 0), Mark::O).unwrap();

        let mut grid = vec![0.0; 9];
        grid[0] = 5.0; // occupied
        grid[4] = 1.0;
        let mut player = greedy_player(grid);

        assert_eq!(player.select_move(&board).unwrap(), (1, 1));
    }

    #[test]
    fn test_bootstrap_target_is_discounted_best_value() {
        let mut grid = vec![0.0; 9];
        grid[2] = 0.6;
        let mut player = greedy_player(grid);
        let board = Board::new(3, 3);

        // First decision: no pending transition, no update yet
        assert_eq!(player.select_move(&board).unwrap(), (0, 2));
        assert!(player.network().updates.is_empty());

        // Second decision pushes the first transition toward gamma * best
        player.select_move(&board).unwrap();
        let (mask, target) = &player.network().updates[0];
        assert_relative_eq!(*target, 0.9 * 0.6);
        assert_relative_eq!(mask[2], 1.0);
        assert_relative_eq!(mask.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_terminal_reward_is_undiscounted() {
        let mut player = greedy_player(vec![0.0; 9]);
        let board = Board::new(3, 3);

        player.select_move(&board).unwrap();
        player.end_of_game(GameOutcome::Win(Mark::X)).unwrap();

        let (_, target) = &player.network().updates[0];
        assert_relative_eq!(*target, 1.0);

        // Pending transition consumed; a second notification is a no-op
        player.end_of_game(GameOutcome::Win(Mark::X)).unwrap();
        assert_eq!(player.network().updates.len(), 1);
    }

    #[test]
    fn test_loss_and_draw_rewards() {
        let board = Board::new(3, 3);

        let mut player = greedy_player(vec![0.0; 9]);
        player.select_move(&board).unwrap();
        player.end_of_game(GameOutcome::Win(Mark::O)).unwrap();
        assert_relative_eq!(player.network().updates[0].1, 0.0);

        let mut player = greedy_player(vec![0.0; 9]);
        player.select_move(&board).unwrap();
        player.end_of_game(GameOutcome::Draw).unwrap();
        assert_relative_eq!(player.network().updates[0].1, 0.5);
    }

    #[test]
    fn test_shape_mismatch_is_fatal() {
        let mut player = greedy_player(vec![0.0; 4]);
        let board = Board::new(3, 3);
        assert!(matches!(
            player.select_move(&board),
            Err(Error::Approximator { .. })
        ));
    }
}

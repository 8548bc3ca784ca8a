//! Tabular agent with episodic Monte-Carlo credit assignment

use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::{INITIAL_VALUE, Player, build_rng, terminal_reward};
use crate::{
    Result,
    encoding::{self, StateKey},
    error::Error,
    game::{Board, Coord, GameOutcome, Mark},
};

/// Running-mean estimate for one candidate move, with its visit count
#[derive(Debug, Clone, Copy, PartialEq)]
struct MoveEstimate {
    mean: f64,
    visits: u32,
}

/// Tabular player that assigns the single terminal reward to every move
/// of the episode via a running incremental mean.
///
/// The table maps encoded state -> candidate move -> (mean, visits),
/// seeded lazily at [`INITIAL_VALUE`] for every legal move the first
/// time a state is visited. Entries are never removed.
pub struct MonteCarloPlayer {
    mark: Option<Mark>,
    epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    values: HashMap<StateKey, HashMap<Coord, MoveEstimate>>,
    history: Vec<(StateKey, Coord)>,
    rng: StdRng,
}

impl MonteCarloPlayer {
    /// Create a player with full initial exploration (epsilon = 1.0)
    pub fn new() -> Self {
        Self::with_params(1.0, 0.9999, 0.0)
    }

    /// * `epsilon` - initial exploration probability [0, 1]
    /// * `epsilon_decay` - multiplicative decay applied after each
    ///   exploratory pick
    /// * `min_epsilon` - floor the decay never crosses
    pub fn with_params(epsilon: f64, epsilon_decay: f64, min_epsilon: f64) -> Self {
        Self {
            mark: None,
            epsilon,
            epsilon_decay,
            min_epsilon,
            values: HashMap::new(),
            history: Vec::new(),
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

    /// Number of distinct states in the value table
    pub fn table_size(&self) -> usize {
        self.values.len()
    }

    /// Mean estimate and visit count for a (state, move) pair, if present
    pub fn estimate(&self, state: &StateKey, mv: Coord) -> Option<(f64, u32)> {
        self.values
            .get(state)
            .and_then(|moves| moves.get(&mv))
            .map(|e| (e.mean, e.visits))
    }

    /// Union another independently trained table into this one.
    ///
    /// States absent here are copied from `other`; states present in
    /// both keep this player's values untouched. Must only be called
    /// between matches.
    pub fn absorb(&mut self, other: &MonteCarloPlayer) {
        for (state, moves) in &other.values {
            self.values
                .entry(state.clone())
                .or_insert_with(|| moves.clone());
        }
    }

    fn require_mark(&self) -> Result<Mark> {
        self.mark.ok_or_else(|| Error::MarkUnassigned {
            player: self.name().to_string(),
        })
    }

    /// Seed every legal move of `state` at the initial estimate if the
    /// state has not been visited before
    fn seed_state(&mut self, board: &Board, state: &StateKey) {
        self.values.entry(state.clone()).or_insert_with(|| {
            board
                .free_cells()
                .into_iter()
                .map(|cell| {
                    (
                        cell,
                        MoveEstimate {
                            mean: INITIAL_VALUE,
                            visits: 0,
                        },
                    )
                })
                .collect()
        });
    }

    /// Highest-estimate legal move, ties broken by first encounter in
    /// row-major order
    fn greedy_move(&self, state: &StateKey, free: &[Coord]) -> Result<Coord> {
        let moves = self.values.get(state).ok_or_else(|| missing(state))?;
        let mut best: Option<(Coord, f64)> = None;
        for &cell in free {
            let estimate = moves.get(&cell).ok_or_else(|| missing(state))?;
            match best {
                Some((_, score)) if estimate.mean <= score => {}
                _ => best = Some((cell, estimate.mean)),
            }
        }
        best.map(|(cell, _)| cell).ok_or(Error::NoValidMoves)
    }

    fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }
}

impl Default for MonteCarloPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(state: &StateKey) -> Error {
    Error::MissingValueEntry {
        state: state.to_string(),
    }
}

impl Player for MonteCarloPlayer {
    fn assign_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
    }

    fn select_move(&mut self, board: &Board) -> Result<(i64, i64)> {
        let me = self.require_mark()?;
        let state = encoding::encode(board, me);
        self.seed_state(board, &state);

        let free = board.free_cells();
        if free.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let cell = if self.rng.random::<f64>() < self.epsilon {
            let cell = *free.choose(&mut self.rng).unwrap();
            self.decay_epsilon();
            cell
        } else {
            self.greedy_move(&state, &free)?
        };

        self.history.push((state, cell));
        Ok((cell.row as i64, cell.col as i64))
    }

    fn end_of_game(&mut self, outcome: GameOutcome) -> Result<()> {
        let me = self.require_mark()?;
        let reward = terminal_reward(outcome, me);

        // Every move of the episode receives the same scalar target
        let history = std::mem::take(&mut self.history);
        for (state, cell) in history {
            let estimate = self
                .values
                .get_mut(&state)
                .and_then(|moves| moves.get_mut(&cell))
                .ok_or_else(|| missing(&state))?;
            let visits = estimate.visits as f64;
            estimate.mean = (estimate.mean * visits + reward) / (visits + 1.0);
            estimate.visits += 1;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Monte-Carlo"
    }

    fn set_exploration(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

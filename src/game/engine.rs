//! Game engine: turn loop, move validation, end-of-game notification

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Coord, Mark},
    rules,
};
use crate::{
    error::{Error, Result},
    players::Player,
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// Board dimensions and rules for one engine instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of board rows (N)
    pub rows: usize,

    /// Number of board columns (M)
    pub cols: usize,

    /// Line length required to win (K)
    pub win_len: usize,

    /// Render the board and announce results on stdout
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_len: 3,
            verbose: false,
        }
    }
}

impl GameConfig {
    /// Check `3 <= win_len <= min(rows, cols)`
    pub fn validate(&self) -> Result<()> {
        if self.rows < 3 || self.cols < 3 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "board must be at least 3x3, got {}x{}",
                    self.rows, self.cols
                ),
            });
        }
        if self.win_len < 3 || self.win_len > self.rows.min(self.cols) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "win length {} must be between 3 and min(rows, cols) = {}",
                    self.win_len,
                    self.rows.min(self.cols)
                ),
            });
        }
        Ok(())
    }
}

/// Validate raw (row, col) input against the current board.
///
/// Accepts only non-negative, in-bounds coordinates that reference an
/// empty cell. Returns the validated coordinate, or `None` for any
/// rejected input; the board is never touched.
pub fn validate_move(board: &Board, row: i64, col: i64) -> Option<Coord> {
    if row < 0 || col < 0 {
        return None;
    }
    let coord = Coord::new(row as usize, col as usize);
    if !board.in_bounds(coord) || !board.is_empty_cell(coord) {
        return None;
    }
    Some(coord)
}

/// Drives a game between two [`Player`] implementations.
///
/// The engine owns the board and is its only mutator. Each call to
/// [`Engine::play`] runs one complete game: marks are assigned up front,
/// players are polled in alternating turns, invalid input re-prompts the
/// same player without advancing the turn, and on a terminal state both
/// players receive exactly one `end_of_game` notification before the
/// board is cleared for reuse.
pub struct Engine {
    config: GameConfig,
    board: Board,
    game_id: usize,
}

impl Engine {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols);
        Ok(Self {
            config,
            board,
            game_id: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play one game; `first` opens as X, `second` replies as O
    pub fn play(&mut self, first: &mut dyn Player, second: &mut dyn Player) -> Result<GameOutcome> {
        self.game_id += 1;
        first.assign_mark(Mark::X);
        second.assign_mark(Mark::O);

        let mut turn = 0;
        let outcome = loop {
            let mark = if turn % 2 == 0 { Mark::X } else { Mark::O };
            if self.config.verbose {
                println!("{}", self.board);
            }

            let player: &mut dyn Player = if turn % 2 == 0 {
                &mut *first
            } else {
                &mut *second
            };
            let (row, col) = player.select_move(&self.board)?;

            // Invalid input self-loops: same player, no board mutation
            let Some(coord) = validate_move(&self.board, row, col) else {
                if self.config.verbose {
                    println!("Invalid move ({row}, {col}), try again");
                }
                continue;
            };

            self.board.place(coord, mark)?;

            if rules::is_winning_move(&self.board, self.config.win_len, coord) {
                break GameOutcome::Win(mark);
            }
            turn += 1;
            if turn >= self.config.rows * self.config.cols {
                break GameOutcome::Draw;
            }
        };

        if self.config.verbose {
            println!("{}", self.board);
            match outcome {
                GameOutcome::Win(mark) => println!("Game {}: Player {mark} wins!", self.game_id),
                GameOutcome::Draw => println!("Game {}: This is a draw!", self.game_id),
            }
        }

        first.end_of_game(outcome)?;
        second.end_of_game(outcome)?;
        self.board.clear();

        Ok(outcome)
    }
}

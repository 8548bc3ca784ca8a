//! Board, rules, and engine for the generalized m,n,k-game

pub mod board;
pub mod engine;
pub mod rules;

pub use board::{Board, Coord, Mark};
pub use engine::{Engine, GameConfig, GameOutcome, validate_move};
pub use rules::{find_winner, is_winning_move};

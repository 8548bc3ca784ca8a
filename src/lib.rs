//! Generalized m,n,k-game with interchangeable players
//!
//! This crate provides:
//! - A game engine for an N x M board with a configurable winning line
//!   length K, including local win detection around the last move
//! - A `Player` capability with human, random, and reinforcement-learning
//!   variants (episodic Monte-Carlo, TD(0), and a neural value-function
//!   player backed by an injected approximator)
//! - A serial training/evaluation pipeline with progress observers

pub mod cli;
pub mod encoding;
pub mod error;
pub mod game;
pub mod pipeline;
pub mod players;

pub use error::{Error, Result};
pub use game::{Board, Coord, Engine, GameConfig, GameOutcome, Mark};
pub use players::Player;

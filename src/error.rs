//! Error types for the mnk crate

use thiserror::Error;

/// Main error type for the mnk crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("player '{player}' was asked to move before a mark was assigned")]
    MarkUnassigned { player: String },

    #[error("value table has no entry for state '{state}' (lazy seeding invariant violated)")]
    MissingValueEntry { state: String },

    #[error("function approximator failure: {message}")]
    Approximator { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("input stream closed while waiting for a move")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

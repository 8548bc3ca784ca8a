//! Player-local board encodings
//!
//! Agents never key their value tables on raw marks. The board is first
//! mapped to a mine/theirs/empty view from the agent's own perspective,
//! so values learned while playing X transfer unchanged to games played
//! as O. Encoding is a pure function of (board, own mark).

use std::fmt;

use crate::game::{Board, Coord, Mark};

const MINE: char = 'm';
const THEIRS: char = 't';
const EMPTY: char = '.';

/// A board state seen from one player's perspective, flattened row-major
/// into a compact string label usable as a hash key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey(String);

impl StateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn cell_char(cell: Option<Mark>, me: Mark) -> char {
    match cell {
        None => EMPTY,
        Some(mark) if mark == me => MINE,
        Some(_) => THEIRS,
    }
}

/// Encode the board from `me`'s perspective
pub fn encode(board: &Board, me: Mark) -> StateKey {
    let mut label = String::with_capacity(board.rows() * board.cols());
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            label.push(cell_char(board.get(Coord::new(row, col)), me));
        }
    }
    StateKey(label)
}

/// Encode the board as it would look after `me` plays `mv`.
///
/// One-step lookahead key for state-value agents; the board itself is
/// not modified.
pub fn encode_with_move(board: &Board, me: Mark, mv: Coord) -> StateKey {
    let mut label = String::with_capacity(board.rows() * board.cols());
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let coord = Coord::new(row, col);
            if coord == mv {
                label.push(MINE);
            } else {
                label.push(cell_char(board.get(coord), me));
            }
        }
    }
    StateKey(label)
}

/// Two binary occupancy planes: the agent's own cells and the
/// opponent's cells, each flattened row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneState {
    pub rows: usize,
    pub cols: usize,
    pub own: Vec<f64>,
    pub opp: Vec<f64>,
}

impl PlaneState {
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Split the board into per-player occupancy planes from `me`'s
/// perspective (network input for the neural player)
pub fn split_planes(board: &Board, me: Mark) -> PlaneState {
    let cells = board.rows() * board.cols();
    let mut own = vec![0.0; cells];
    let mut opp = vec![0.0; cells];

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let index = row * board.cols() + col;
            match board.get(Coord::new(row, col)) {
                Some(mark) if mark == me => own[index] = 1.0,
                Some(_) => opp[index] = 1.0,
                None => {}
            }
        }
    }

    PlaneState {
        rows: board.rows(),
        cols: board.cols(),
        own,
        opp,
    }
}

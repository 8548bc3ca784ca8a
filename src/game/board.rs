//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the two marks placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A validated 0-indexed board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N x M grid of optionally-occupied cells.
///
/// Mutated only by the engine, one cell per accepted move. Cleared and
/// reused between games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Create an empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Get the mark at a coordinate, or `None` for an empty cell.
    ///
    /// Out-of-bounds coordinates read as empty; bounds are enforced at
    /// move-validation time, not here.
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        if !self.in_bounds(coord) {
            return None;
        }
        self.cells[self.index(coord)]
    }

    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.cells[self.index(coord)].is_none()
    }

    /// Place a mark on an empty in-bounds cell
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<()> {
        if !self.in_bounds(coord) {
            return Err(Error::OutOfBounds {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let index = self.index(coord);
        if self.cells[index].is_some() {
            return Err(Error::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// All empty cells in row-major order
    pub fn free_cells(&self) -> Vec<Coord> {
        let mut free = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let coord = Coord::new(row, col);
                if self.cells[self.index(coord)].is_none() {
                    free.push(coord);
                }
            }
        }
        free
    }

    /// Number of occupied cells
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Reset every cell to empty for the next game
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..self.cols {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..self.rows {
            write!(f, "{row}")?;
            for col in 0..self.cols {
                let c = self
                    .get(Coord::new(row, col))
                    .map(Mark::to_char)
                    .unwrap_or('-');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

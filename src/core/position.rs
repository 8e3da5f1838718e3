//! Bounds-validated lattice coordinates and orthogonal directions.
//!
//! ## Position
//!
//! An immutable (row, col) coordinate on an N×N board. Positions are only
//! constructed through the validating [`Position::new`] factory, so a
//! `Position` in hand is always in bounds for the board size it carries.
//!
//! ## Coordinates
//!
//! Row 0 is the bottom edge and row N-1 the top; [`Direction::Up`]
//! increments the row. Columns grow to the right.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

use super::error::PositionError;

/// The four orthogonal directions of pawn movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed iteration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// A bounds-validated coordinate on an N×N board.
///
/// Carries its originating board size so boards can reject coordinates
/// built for a different size. Equality and hashing are by (row, col)
/// only; the size is a validation tag, not part of the value's identity.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
    size: usize,
}

impl Position {
    /// Create a position on a board of side length `size`.
    ///
    /// Fails with [`PositionError::OutOfBounds`] when `row` or `col`
    /// is not in `[0, size)`.
    pub fn new(row: usize, col: usize, size: usize) -> Result<Self, PositionError> {
        if row >= size || col >= size {
            return Err(PositionError::OutOfBounds { row, col, size });
        }
        Ok(Self { row, col, size })
    }

    /// Row index, in `[0, size)`.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column index, in `[0, size)`.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Side length of the board this position was validated against.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Check whether a neighboring square exists in `direction`.
    #[must_use]
    pub fn has_neighbor(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.row + 1 < self.size,
            Direction::Down => self.row > 0,
            Direction::Left => self.col > 0,
            Direction::Right => self.col + 1 < self.size,
        }
    }

    /// The neighboring square in `direction`.
    ///
    /// Fails with [`PositionError::OffBoard`] when the step would leave
    /// the board.
    pub fn neighbor(&self, direction: Direction) -> Result<Self, PositionError> {
        if !self.has_neighbor(direction) {
            return Err(PositionError::OffBoard {
                row: self.row,
                col: self.col,
                direction,
            });
        }
        let (row, col) = match direction {
            Direction::Up => (self.row + 1, self.col),
            Direction::Down => (self.row - 1, self.col),
            Direction::Left => (self.row, self.col - 1),
            Direction::Right => (self.row, self.col + 1),
        };
        Ok(Self {
            row,
            col,
            size: self.size,
        })
    }

    /// All existing orthogonal neighbors (2 to 4 of them).
    #[must_use]
    pub fn neighbors(&self) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.neighbor(direction).ok())
            .collect()
    }

    // Named conveniences for the four directions.

    pub fn up(&self) -> Result<Self, PositionError> {
        self.neighbor(Direction::Up)
    }

    pub fn down(&self) -> Result<Self, PositionError> {
        self.neighbor(Direction::Down)
    }

    pub fn left(&self) -> Result<Self, PositionError> {
        self.neighbor(Direction::Left)
    }

    pub fn right(&self) -> Result<Self, PositionError> {
        self.neighbor(Direction::Right)
    }

    #[must_use]
    pub fn has_up(&self) -> bool {
        self.has_neighbor(Direction::Up)
    }

    #[must_use]
    pub fn has_down(&self) -> bool {
        self.has_neighbor(Direction::Down)
    }

    #[must_use]
    pub fn has_left(&self) -> bool {
        self.has_neighbor(Direction::Left)
    }

    #[must_use]
    pub fn has_right(&self) -> bool {
        self.has_neighbor(Direction::Right)
    }
}

// Identity is (row, col); `size` is only a validation tag.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

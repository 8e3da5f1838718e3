//! Wall placement descriptors.
//!
//! A wall is keyed by an anchor square and an orientation, and occupies
//! exactly two lattice cells:
//!
//! - horizontal at (r, c): cells (r, c) and (r, c+1); blocks vertical
//!   movement across row boundary r within those columns
//! - vertical at (r, c): cells (r, c) and (r+1, c); blocks horizontal
//!   movement across column boundary c within those rows
//!
//! Which crossings a given live wall set blocks is answered by
//! [`crate::board::Board::is_wall_between`].

use serde::{Deserialize, Serialize};

use super::error::PositionError;
use super::position::Position;

/// Orientation of a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        write!(f, "{}", name)
    }
}

/// An immutable wall placement descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    anchor: Position,
    orientation: Orientation,
}

impl Wall {
    /// Create a wall anchored at `anchor`.
    ///
    /// Construction never fails; whether the wall actually fits on the
    /// board is checked by [`Wall::cells`] and again by the board at
    /// placement time.
    #[must_use]
    pub const fn new(anchor: Position, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    /// The anchor square.
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    /// The orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The two lattice cells this wall occupies.
    ///
    /// Fails with [`PositionError::OffBoard`] when the anchor sits at the
    /// extreme edge for its orientation, leaving no room for the second
    /// cell. The board rejects such walls too; this is defense in depth.
    pub fn cells(&self) -> Result<(Position, Position), PositionError> {
        let second = match self.orientation {
            Orientation::Horizontal => self.anchor.right()?,
            Orientation::Vertical => self.anchor.up()?,
        };
        Ok((self.anchor, second))
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wall at {}", self.orientation, self.anchor)
    }
}

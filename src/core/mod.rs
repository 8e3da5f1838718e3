//! Core engine types: players, positions, walls, errors.
//!
//! These are the leaf value types the rest of the engine is built on.
//! All of them are immutable once constructed and cheap to copy.

pub mod player;
pub mod position;
pub mod wall;
pub mod error;

pub use player::PlayerId;
pub use position::{Direction, Position};
pub use wall::{Orientation, Wall};
pub use error::{BoardError, GameError, PositionError};

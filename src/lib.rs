//! # quoridor-core
//!
//! A rules engine for a two-player grid-and-walls race game: each player
//! moves a pawn toward the opposite edge of the board, or spends a limited
//! budget of blocking walls, under the constraint that no wall may ever
//! fully sever either player's path to their goal.
//!
//! ## Design Principles
//!
//! 1. **Transactional mutation**: every operation either commits a full,
//!    consistent state transition or leaves the game exactly as it was.
//!    Mutation order is always snapshot, attempt, rollback-on-failure.
//!
//! 2. **Layered legality**: `Board` enforces local legality (wall overlap
//!    and crossing, movement and jumps); `Game` enforces global legality
//!    (turn order, budgets, and the path-connectivity invariant via
//!    breadth-first search after every wall placement).
//!
//! 3. **Snapshot history**: undo/redo works on whole-state snapshots rather
//!    than inverse operations. Board state is small and bounded, and the
//!    `im` wall list makes snapshots cheap to take.
//!
//! ## Modules
//!
//! - `core`: Positions, walls, player IDs, errors
//! - `board`: Pawn and wall ownership, placement and movement legality
//! - `game`: Turn/win state machine, connectivity invariant, undo/redo
//! - `moves`: Legal-move enumeration for AI and hint consumers
//! - `events`: Notification types for external observers

pub mod core;
pub mod board;
pub mod game;
pub mod moves;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Direction, GameError, Orientation, PlayerId, Position, PositionError, Wall,
};

pub use crate::board::Board;

pub use crate::game::{Game, GameState, GameStatus, Goal, Snapshot, DEFAULT_WALL_BUDGET};

pub use crate::moves::{legal_pawn_moves, Move};

pub use crate::events::{EventBus, GameEvent, GameObserver};

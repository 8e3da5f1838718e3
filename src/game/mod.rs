//! Game layer: turn/win state machine, wall budgets, the connectivity
//! invariant, and snapshot-based undo/redo.

pub mod state;
pub mod snapshot;
pub mod game;

pub(crate) mod path;

pub use state::{GameState, GameStatus, Goal};
pub use snapshot::Snapshot;
pub use game::{Game, DEFAULT_WALL_BUDGET};

//! Turn and win status, and per-player goals.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position};

/// Whether the game is running or has been won.
///
/// `Won` is terminal for `move_pawn` and `place_wall`; only `undo` can
/// leave it, and `redo` can re-enter it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// Observable turn/status pair, returned by [`crate::game::Game::state`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Whose turn it is. Unchanged by a winning move.
    pub turn: PlayerId,
    pub status: GameStatus,
}

/// A player's goal: the board row their pawn must reach.
///
/// Goals are assigned per player at registration rather than hard-coded
/// into the win check. The defaults reproduce the classic layout: the
/// first player races to the top row, the second to row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    row: usize,
}

impl Goal {
    /// Goal at a specific row.
    #[must_use]
    pub const fn row(row: usize) -> Self {
        Self { row }
    }

    /// The row a pawn must reach.
    #[must_use]
    pub const fn target_row(&self) -> usize {
        self.row
    }

    /// Whether `position` satisfies this goal.
    #[must_use]
    pub fn reached(&self, position: &Position) -> bool {
        position.row() == self.row
    }
}

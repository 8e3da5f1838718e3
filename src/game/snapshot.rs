//! Deep-copy state snapshots for undo/redo.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{PlayerId, Position, Wall};
use crate::game::state::GameState;

/// A full, independent copy of everything that changes during play:
/// pawn positions, the wall list, turn/status, and remaining wall budgets.
///
/// This is also the shape a persistence layer would serialize; the crate
/// keeps it `serde`-ready but stores nothing itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) pawns: FxHashMap<PlayerId, Position>,
    pub(crate) walls: Vector<Wall>,
    pub(crate) state: GameState,
    pub(crate) walls_remaining: FxHashMap<PlayerId, u32>,
}

impl Snapshot {
    /// Capture the mutable state of a game.
    pub(crate) fn capture(
        board: &Board,
        state: GameState,
        walls_remaining: &FxHashMap<PlayerId, u32>,
    ) -> Self {
        Self {
            pawns: board.pawns(),
            walls: board.walls(),
            state,
            walls_remaining: walls_remaining.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Orientation;
    use crate::game::state::GameStatus;

    #[test]
    fn test_capture_is_independent_of_the_board() {
        let mut pawns = FxHashMap::default();
        pawns.insert(PlayerId::new(1), Position::new(0, 4, 9).unwrap());
        let mut board = Board::with_pawns(9, pawns).unwrap();

        let state = GameState {
            turn: PlayerId::new(1),
            status: GameStatus::InProgress,
        };
        let mut budgets = FxHashMap::default();
        budgets.insert(PlayerId::new(1), 10);

        let snapshot = Snapshot::capture(&board, state, &budgets);

        // Mutating the live board does not touch the snapshot.
        board
            .place_wall(Wall::new(
                Position::new(3, 3, 9).unwrap(),
                Orientation::Horizontal,
            ))
            .unwrap();
        board
            .move_pawn(PlayerId::new(1), Position::new(1, 4, 9).unwrap())
            .unwrap();

        assert!(snapshot.walls.is_empty());
        assert_eq!(
            snapshot.pawns[&PlayerId::new(1)],
            Position::new(0, 4, 9).unwrap()
        );
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let mut pawns = FxHashMap::default();
        pawns.insert(PlayerId::new(1), Position::new(2, 3, 9).unwrap());
        let mut board = Board::with_pawns(9, pawns).unwrap();
        board
            .place_wall(Wall::new(
                Position::new(4, 4, 9).unwrap(),
                Orientation::Vertical,
            ))
            .unwrap();

        let mut budgets = FxHashMap::default();
        budgets.insert(PlayerId::new(1), 9);
        let snapshot = Snapshot::capture(
            &board,
            GameState {
                turn: PlayerId::new(1),
                status: GameStatus::InProgress,
            },
            &budgets,
        );

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}

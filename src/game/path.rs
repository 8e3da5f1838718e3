//! Breadth-first connectivity search for the path invariant.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::board::Board;
use crate::core::Position;
use crate::game::state::Goal;

/// Whether an unobstructed orthogonal path exists from `start` to any
/// square satisfying `goal`.
///
/// Edges exist wherever [`Board::is_wall_between`] is false. Pawns do not
/// block traversal: the invariant models "could some sequence of future
/// moves reach the goal", not "can I move there right now". Succeeds the
/// first time a goal-row square is dequeued.
pub(crate) fn has_path(board: &Board, start: Position, goal: Goal) -> bool {
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut frontier: VecDeque<Position> = VecDeque::new();
    visited.insert(start);
    frontier.push_back(start);

    while let Some(square) = frontier.pop_front() {
        if goal.reached(&square) {
            return true;
        }
        for next in square.neighbors() {
            if !visited.contains(&next) && !board.is_wall_between(square, next) {
                visited.insert(next);
                frontier.push_back(next);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, Wall};

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col, 9).unwrap()
    }

    fn wall(board: &mut Board, row: usize, col: usize, orientation: Orientation) {
        board
            .place_wall(Wall::new(pos(row, col), orientation))
            .unwrap();
    }

    #[test]
    fn test_open_board_has_path() {
        let board = Board::new(9);
        assert!(has_path(&board, pos(0, 4), Goal::row(8)));
        assert!(has_path(&board, pos(8, 4), Goal::row(0)));
    }

    #[test]
    fn test_start_on_goal_row() {
        let board = Board::new(9);
        assert!(has_path(&board, pos(8, 0), Goal::row(8)));
    }

    #[test]
    fn test_path_routes_around_walls() {
        let mut board = Board::new(9);
        // A long fence across most of row boundary 4, with a gap at the
        // right edge.
        wall(&mut board, 4, 0, Orientation::Horizontal);
        wall(&mut board, 4, 2, Orientation::Horizontal);
        wall(&mut board, 4, 4, Orientation::Horizontal);
        wall(&mut board, 4, 6, Orientation::Horizontal);

        assert!(has_path(&board, pos(0, 4), Goal::row(8)));
    }

    #[test]
    fn test_sealed_pocket_has_no_path() {
        let mut board = Board::new(9);
        // Seal the pocket {(0,4), (1,4)}: lid first, then the two sides
        // (the lid's anchor would trip the crossing rule if placed last).
        wall(&mut board, 1, 4, Orientation::Horizontal);
        wall(&mut board, 0, 3, Orientation::Vertical);
        wall(&mut board, 0, 4, Orientation::Vertical);

        assert!(!has_path(&board, pos(0, 4), Goal::row(8)));
        assert!(!has_path(&board, pos(1, 4), Goal::row(8)));
        // Outside the pocket the board is still connected.
        assert!(has_path(&board, pos(0, 2), Goal::row(8)));
    }

    #[test]
    fn test_pawns_do_not_block_search() {
        let mut pawns = rustc_hash::FxHashMap::default();
        pawns.insert(crate::core::PlayerId::new(1), pos(0, 4));
        pawns.insert(crate::core::PlayerId::new(2), pos(1, 4));
        let board = Board::with_pawns(9, pawns).unwrap();

        // The opposing pawn sits directly on the only straight-line path;
        // the search walks through it anyway.
        assert!(has_path(&board, pos(0, 4), Goal::row(8)));
    }
}

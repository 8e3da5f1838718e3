//! Board state: pawn positions and the live wall set.
//!
//! The board enforces *local* legality:
//!
//! - wall placement: orientation-specific bound check, same-orientation
//!   overlap, and the crossing rule
//! - pawn movement: simple orthogonal moves and straight jumps over the
//!   opposing pawn
//!
//! Global legality (turn order, budgets, path connectivity) lives one
//! layer up in [`crate::game::Game`].
//!
//! The wall list is an ordered, append-mostly sequence: new walls append,
//! and the only removal supported is popping the most recent wall, which
//! the game layer uses to roll back a placement that severed a path.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::{BoardError, Direction, Orientation, PlayerId, Position, Wall};

/// Pawn positions plus the ordered list of placed walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    pawns: FxHashMap<PlayerId, Position>,
    walls: Vector<Wall>,
}

impl Board {
    /// Create an empty board of side length `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2");
        Self {
            size,
            pawns: FxHashMap::default(),
            walls: Vector::new(),
        }
    }

    /// Create a board pre-seeded with pawn positions.
    ///
    /// Fails with [`BoardError::SizeMismatch`] when any position was
    /// validated against a different board size.
    pub fn with_pawns(
        size: usize,
        pawns: FxHashMap<PlayerId, Position>,
    ) -> Result<Self, BoardError> {
        assert!(pawns.len() <= 2, "at most two pawns are supported");
        let mut board = Self::new(size);
        for position in pawns.values() {
            board.check_size(*position)?;
        }
        board.pawns = pawns;
        Ok(board)
    }

    /// Rebuild a board from snapshot parts: seeded pawns plus wall-by-wall
    /// replay of a previously live wall list.
    pub(crate) fn from_parts(
        size: usize,
        pawns: FxHashMap<PlayerId, Position>,
        walls: &Vector<Wall>,
    ) -> Self {
        let mut board = Self::new(size);
        board.pawns = pawns;
        for wall in walls {
            // Replayed walls were validated when first placed.
            let replayed = board.place_wall(*wall);
            debug_assert!(replayed.is_ok(), "snapshot wall failed to replay");
        }
        board
    }

    fn check_size(&self, position: Position) -> Result<(), BoardError> {
        if position.size() != self.size {
            return Err(BoardError::SizeMismatch {
                position_size: position.size(),
                board_size: self.size,
            });
        }
        Ok(())
    }

    // === Walls ===

    /// Place a wall, enforcing local legality.
    ///
    /// Rejected unless:
    /// - the anchor leaves room for the wall's second cell,
    /// - no existing wall of the same orientation shares an occupied cell,
    /// - the anchor does not coincide with the *second* occupied cell of an
    ///   existing wall of the opposite orientation (the crossing rule).
    ///
    /// The crossing rule is deliberately one-sided: the new wall's second
    /// cell is never tested against existing anchors. Recorded games depend
    /// on exactly this acceptance set, so the asymmetry must stay.
    ///
    /// On failure the board is unchanged.
    pub fn place_wall(&mut self, wall: Wall) -> Result<(), BoardError> {
        self.check_size(wall.anchor())?;

        let Ok((first, second)) = wall.cells() else {
            return Err(BoardError::InvalidWallPlacement {
                wall,
                reason: "anchor leaves no room for the wall's second cell",
            });
        };

        for existing in &self.walls {
            // Live walls always have valid cells; they passed this check.
            let Ok((occupied_a, occupied_b)) = existing.cells() else {
                continue;
            };
            if existing.orientation() == wall.orientation() {
                if occupied_a == first
                    || occupied_a == second
                    || occupied_b == first
                    || occupied_b == second
                {
                    return Err(BoardError::InvalidWallPlacement {
                        wall,
                        reason: "overlaps a wall of the same orientation",
                    });
                }
            } else if occupied_b == wall.anchor() {
                return Err(BoardError::InvalidWallPlacement {
                    wall,
                    reason: "crosses an existing wall",
                });
            }
        }

        self.walls.push_back(wall);
        Ok(())
    }

    /// Pop the most recently placed wall.
    ///
    /// Only used by the game layer to roll back a placement that violated
    /// the connectivity invariant; arbitrary removal is never exposed.
    pub(crate) fn remove_last_wall(&mut self) -> Option<Wall> {
        self.walls.pop_back()
    }

    // === Pawns ===

    /// Move a player's pawn to `target`.
    ///
    /// Legal iff `target` is a simple move (an unoccupied, unblocked
    /// orthogonal neighbor) or a straight jump (over the adjacent opposing
    /// pawn onto the next unoccupied cell in the same line, with neither
    /// boundary crossing blocked). There is no diagonal fallback when the
    /// straight jump is blocked.
    ///
    /// On failure the board is unchanged.
    pub fn move_pawn(&mut self, player: PlayerId, target: Position) -> Result<(), BoardError> {
        self.check_size(target)?;
        let current = *self
            .pawns
            .get(&player)
            .ok_or(BoardError::InvalidMove {
                player,
                reason: "no pawn found for player",
            })?;

        if self.is_simple_move(current, target) || self.is_jump(current, target) {
            self.pawns.insert(player, target);
            Ok(())
        } else {
            Err(BoardError::InvalidMove {
                player,
                reason: "target is not a legal step or jump",
            })
        }
    }

    fn is_simple_move(&self, from: Position, to: Position) -> bool {
        from.neighbors().contains(&to) && !self.is_occupied(to) && !self.is_wall_between(from, to)
    }

    fn is_jump(&self, from: Position, to: Position) -> bool {
        for direction in Direction::ALL {
            let Ok(over) = from.neighbor(direction) else {
                continue;
            };
            if !self.is_occupied(over) {
                continue;
            }
            let Ok(landing) = over.neighbor(direction) else {
                continue;
            };
            if landing == to
                && !self.is_occupied(landing)
                && !self.is_wall_between(from, over)
                && !self.is_wall_between(over, landing)
            {
                return true;
            }
        }
        false
    }

    /// Whether any pawn currently stands on `position`.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.pawns.values().any(|p| *p == position)
    }

    // === Adjacency queries ===

    /// Whether a wall blocks movement between two adjacent squares.
    ///
    /// For vertically adjacent squares, a horizontal wall anchored at the
    /// lesser row whose two-column span covers the shared column blocks the
    /// crossing. For horizontally adjacent squares, a vertical wall spans
    /// two rows, and blocks the crossing when it covers the shared row and
    /// sits on the boundary strictly between the two columns.
    ///
    /// Non-adjacent or diagonal pairs are never blocked (returns `false`,
    /// never an error).
    #[must_use]
    pub fn is_wall_between(&self, a: Position, b: Position) -> bool {
        if a.col() == b.col() && a.row().abs_diff(b.row()) == 1 {
            let boundary_row = a.row().min(b.row());
            let col = a.col();
            self.walls.iter().any(|wall| {
                wall.orientation() == Orientation::Horizontal
                    && wall.anchor().row() == boundary_row
                    && (wall.anchor().col() == col || wall.anchor().col() + 1 == col)
            })
        } else if a.row() == b.row() && a.col().abs_diff(b.col()) == 1 {
            let boundary_col = a.col().min(b.col());
            let row = a.row();
            self.walls.iter().any(|wall| {
                wall.orientation() == Orientation::Vertical
                    && wall.anchor().col() == boundary_col
                    && (wall.anchor().row() == row || wall.anchor().row() + 1 == row)
            })
        } else {
            false
        }
    }

    // === Accessors ===

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// A player's current pawn position, if they have one.
    #[must_use]
    pub fn pawn(&self, player: PlayerId) -> Option<Position> {
        self.pawns.get(&player).copied()
    }

    /// Defensive copy of the pawn map.
    #[must_use]
    pub fn pawns(&self) -> FxHashMap<PlayerId, Position> {
        self.pawns.clone()
    }

    /// Defensive copy of the ordered wall list (O(1); the list is a
    /// persistent structure).
    #[must_use]
    pub fn walls(&self) -> Vector<Wall> {
        self.walls.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col, 9).unwrap()
    }

    fn wall(row: usize, col: usize, orientation: Orientation) -> Wall {
        Wall::new(pos(row, col), orientation)
    }

    fn board_with_pawns() -> Board {
        let mut pawns = FxHashMap::default();
        pawns.insert(PlayerId::new(1), pos(0, 4));
        pawns.insert(PlayerId::new(2), pos(8, 4));
        Board::with_pawns(9, pawns).unwrap()
    }

    // === Wall placement ===

    #[test]
    fn test_place_wall_appends() {
        let mut board = Board::new(9);
        board.place_wall(wall(3, 3, Orientation::Horizontal)).unwrap();
        assert_eq!(board.walls().len(), 1);
    }

    #[test]
    fn test_place_wall_at_edge_rejected() {
        let mut board = Board::new(9);
        let err = board
            .place_wall(wall(0, 8, Orientation::Horizontal))
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidWallPlacement { .. }));
        assert!(board.walls().is_empty());

        assert!(board.place_wall(wall(8, 0, Orientation::Vertical)).is_err());
    }

    #[test]
    fn test_same_orientation_overlap_rejected() {
        let mut board = Board::new(9);
        board.place_wall(wall(3, 3, Orientation::Horizontal)).unwrap();

        // Shares cell (3, 4) with the existing span (3,3)-(3,4).
        let err = board
            .place_wall(wall(3, 4, Orientation::Horizontal))
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidWallPlacement { .. }));
        assert_eq!(board.walls().len(), 1);

        // Disjoint span is fine.
        board.place_wall(wall(3, 5, Orientation::Horizontal)).unwrap();
    }

    #[test]
    fn test_crossing_rule_rejects_anchor_on_second_cell() {
        let mut board = Board::new(9);
        board.place_wall(wall(3, 3, Orientation::Horizontal)).unwrap();

        // (3, 4) is the horizontal wall's second cell.
        let err = board
            .place_wall(wall(3, 4, Orientation::Vertical))
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidWallPlacement { .. }));
    }

    #[test]
    fn test_crossing_rule_is_asymmetric() {
        let mut board = Board::new(9);
        board.place_wall(wall(3, 3, Orientation::Horizontal)).unwrap();

        // Only the new anchor is compared against existing second cells.
        // A vertical wall sharing the horizontal wall's *anchor* cell is
        // therefore accepted, even though the two walls touch.
        board.place_wall(wall(3, 3, Orientation::Vertical)).unwrap();
        assert_eq!(board.walls().len(), 2);
    }

    #[test]
    fn test_remove_last_wall_pops_in_order() {
        let mut board = Board::new(9);
        board.place_wall(wall(1, 1, Orientation::Horizontal)).unwrap();
        board.place_wall(wall(5, 5, Orientation::Vertical)).unwrap();

        assert_eq!(
            board.remove_last_wall(),
            Some(wall(5, 5, Orientation::Vertical))
        );
        assert_eq!(board.walls().len(), 1);
    }

    #[test]
    fn test_place_wall_size_mismatch() {
        let mut board = Board::new(9);
        let foreign = Wall::new(Position::new(2, 2, 5).unwrap(), Orientation::Horizontal);
        assert!(matches!(
            board.place_wall(foreign),
            Err(BoardError::SizeMismatch { .. })
        ));
    }

    // === Adjacency queries ===

    #[test]
    fn test_wall_between_vertical_neighbors() {
        let mut board = Board::new(9);
        board.place_wall(wall(4, 4, Orientation::Horizontal)).unwrap();

        // Span covers columns 4 and 5 across row boundary 4.
        assert!(board.is_wall_between(pos(4, 4), pos(5, 4)));
        assert!(board.is_wall_between(pos(5, 5), pos(4, 5)));
        assert!(!board.is_wall_between(pos(4, 3), pos(5, 3)));
        assert!(!board.is_wall_between(pos(4, 6), pos(5, 6)));
    }

    #[test]
    fn test_wall_between_horizontal_neighbors() {
        let mut board = Board::new(9);
        board.place_wall(wall(4, 4, Orientation::Vertical)).unwrap();

        // Spans rows 4 and 5 across column boundary 4.
        assert!(board.is_wall_between(pos(4, 4), pos(4, 5)));
        assert!(board.is_wall_between(pos(5, 5), pos(5, 4)));
        assert!(!board.is_wall_between(pos(3, 4), pos(3, 5)));
        assert!(!board.is_wall_between(pos(6, 4), pos(6, 5)));
    }

    #[test]
    fn test_wall_between_non_adjacent_is_false() {
        let mut board = Board::new(9);
        board.place_wall(wall(4, 4, Orientation::Horizontal)).unwrap();

        assert!(!board.is_wall_between(pos(4, 4), pos(6, 4))); // two apart
        assert!(!board.is_wall_between(pos(4, 4), pos(5, 5))); // diagonal
        assert!(!board.is_wall_between(pos(4, 4), pos(4, 4))); // same square
    }

    // === Movement ===

    #[test]
    fn test_simple_move() {
        let mut board = board_with_pawns();
        board.move_pawn(PlayerId::new(1), pos(1, 4)).unwrap();
        assert_eq!(board.pawn(PlayerId::new(1)), Some(pos(1, 4)));
    }

    #[test]
    fn test_move_without_pawn() {
        let mut board = Board::new(9);
        let err = board.move_pawn(PlayerId::new(1), pos(1, 4)).unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove { .. }));
    }

    #[test]
    fn test_move_blocked_by_wall() {
        let mut board = board_with_pawns();
        board.place_wall(wall(0, 4, Orientation::Horizontal)).unwrap();

        let err = board.move_pawn(PlayerId::new(1), pos(1, 4)).unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove { .. }));
        assert_eq!(board.pawn(PlayerId::new(1)), Some(pos(0, 4)));
    }

    #[test]
    fn test_move_onto_occupied_square_rejected() {
        let mut pawns = FxHashMap::default();
        pawns.insert(PlayerId::new(1), pos(4, 4));
        pawns.insert(PlayerId::new(2), pos(4, 5));
        let mut board = Board::with_pawns(9, pawns).unwrap();

        assert!(board.move_pawn(PlayerId::new(1), pos(4, 5)).is_err());
    }

    #[test]
    fn test_jump_over_adjacent_pawn() {
        let mut pawns = FxHashMap::default();
        pawns.insert(PlayerId::new(1), pos(4, 4));
        pawns.insert(PlayerId::new(2), pos(4, 5));
        let mut board = Board::with_pawns(9, pawns).unwrap();

        board.move_pawn(PlayerId::new(1), pos(4, 6)).unwrap();
        assert_eq!(board.pawn(PlayerId::new(1)), Some(pos(4, 6)));
    }

    #[test]
    fn test_jump_blocked_by_far_wall() {
        let mut pawns = FxHashMap::default();
        pawns.insert(PlayerId::new(1), pos(4, 4));
        pawns.insert(PlayerId::new(2), pos(4, 5));
        let mut board = Board::with_pawns(9, pawns).unwrap();

        // Blocks the (4,5)-(4,6) boundary behind the opposing pawn.
        board.place_wall(wall(4, 5, Orientation::Vertical)).unwrap();

        let err = board.move_pawn(PlayerId::new(1), pos(4, 6)).unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove { .. }));
        assert_eq!(board.pawn(PlayerId::new(1)), Some(pos(4, 4)));
    }

    #[test]
    fn test_jump_without_intervening_pawn_rejected() {
        let mut board = board_with_pawns();
        // (2, 4) is two squares up with nothing to jump over.
        assert!(board.move_pawn(PlayerId::new(1), pos(2, 4)).is_err());
    }

    #[test]
    fn test_diagonal_move_rejected() {
        let mut board = board_with_pawns();
        assert!(board.move_pawn(PlayerId::new(1), pos(1, 5)).is_err());
    }

    #[test]
    fn test_with_pawns_size_mismatch() {
        let mut pawns = FxHashMap::default();
        pawns.insert(PlayerId::new(1), Position::new(0, 0, 5).unwrap());
        assert!(matches!(
            Board::with_pawns(9, pawns),
            Err(BoardError::SizeMismatch { .. })
        ));
    }
}

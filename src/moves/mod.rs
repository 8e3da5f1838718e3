//! Legal-move enumeration.
//!
//! The hook consumed by AI and hint collaborators: everything
//! [`crate::board::Board::move_pawn`] and [`crate::game::Game::place_wall`]
//! would accept for the player to move, with no mutation of live state.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Direction, Orientation, PlayerId, Position, Wall};
use crate::game::{path, Game};

/// One legal action: step/jump to a square, or place a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Pawn(Position),
    Wall(Wall),
}

/// Every square the player's pawn may legally move to: the unblocked,
/// unoccupied orthogonal neighbors plus straight jumps over the opposing
/// pawn. Empty when the player has no pawn on the board.
#[must_use]
pub fn legal_pawn_moves(board: &Board, player: PlayerId) -> SmallVec<[Position; 5]> {
    let Some(from) = board.pawn(player) else {
        return SmallVec::new();
    };

    let mut out = SmallVec::new();
    for direction in Direction::ALL {
        let Ok(next) = from.neighbor(direction) else {
            continue;
        };
        if board.is_wall_between(from, next) {
            continue;
        }
        if !board.is_occupied(next) {
            out.push(next);
        } else if let Ok(landing) = next.neighbor(direction) {
            if !board.is_occupied(landing) && !board.is_wall_between(next, landing) {
                out.push(landing);
            }
        }
    }
    out
}

impl Game {
    /// Every wall the player could legally place right now, including the
    /// connectivity check. Candidates are evaluated against a cloned board,
    /// so the game is not observably mutated. Empty when it is not the
    /// player's turn, the game is over, or the budget is spent.
    #[must_use]
    pub fn legal_wall_placements(&self, player: PlayerId) -> Vec<Wall> {
        if !self.players().contains(&player)
            || self.state().status.is_over()
            || self.state().turn != player
            || self.remaining_walls().get(&player).copied().unwrap_or(0) == 0
        {
            return Vec::new();
        }

        let size = self.board_size();
        let mut out = Vec::new();
        for row in 0..size {
            for col in 0..size {
                let Ok(anchor) = Position::new(row, col, size) else {
                    continue;
                };
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    let wall = Wall::new(anchor, orientation);
                    let mut trial = self.board().clone();
                    if trial.place_wall(wall).is_err() {
                        continue;
                    }
                    let all_connected = self.players().iter().all(|&p| {
                        match (trial.pawn(p), self.goal(p)) {
                            (Some(start), Some(goal)) => path::has_path(&trial, start, goal),
                            _ => true,
                        }
                    });
                    if all_connected {
                        out.push(wall);
                    }
                }
            }
        }
        out
    }

    /// Every legal action for `player` this turn: pawn destinations plus
    /// wall placements.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        if !self.players().contains(&player)
            || self.state().status.is_over()
            || self.state().turn != player
        {
            return Vec::new();
        }

        let mut out: Vec<Move> = legal_pawn_moves(self.board(), player)
            .into_iter()
            .map(Move::Pawn)
            .collect();
        out.extend(self.legal_wall_placements(player).into_iter().map(Move::Wall));
        out
    }
}

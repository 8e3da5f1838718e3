//! Error types for every layer of the engine.
//!
//! Every failure is synchronous and caller-visible, carries a readable
//! message, and is raised only after the engine has rolled state back to
//! exactly what it was before the call.

use thiserror::Error;

use super::player::PlayerId;
use super::position::Direction;
use super::wall::Wall;

/// Failures constructing or stepping a [`super::Position`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("coordinate ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("no square {direction} of ({row}, {col})")]
    OffBoard {
        row: usize,
        col: usize,
        direction: Direction,
    },
}

/// Failures of board-local legality: wall placement and pawn movement.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("position sized for a {position_size}x{position_size} board used on a {board_size}x{board_size} board")]
    SizeMismatch {
        position_size: usize,
        board_size: usize,
    },

    #[error("invalid wall placement, {wall}: {reason}")]
    InvalidWallPlacement { wall: Wall, reason: &'static str },

    #[error("invalid move for {player}: {reason}")]
    InvalidMove {
        player: PlayerId,
        reason: &'static str,
    },

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Failures of game-level legality: registration, turn order, budgets,
/// the connectivity invariant, and history.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{0} is not in this game")]
    NotInGame(PlayerId),

    #[error("the game has already ended")]
    GameEnded,

    #[error("it is not {0}'s turn")]
    WrongTurn(PlayerId),

    #[error("{0} has no walls remaining")]
    NoWallsRemaining(PlayerId),

    #[error("wall would leave {0} with no path to their goal")]
    PathBlocked(PlayerId),

    #[error("the game already has the maximum of two players")]
    MaxPlayersReached,

    #[error("no moves to undo")]
    NothingToUndo,

    #[error("no moves to redo")]
    NothingToRedo,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Position(#[from] PositionError),
}

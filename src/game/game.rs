//! The game state machine.
//!
//! `Game` wraps a [`Board`] with everything the board does not know about:
//! player registration, per-player wall budgets, turn order, the win
//! condition, the path-connectivity invariant, and undo/redo history.
//!
//! ## Transaction discipline
//!
//! Every mutating operation follows the same order: push an undo snapshot,
//! attempt the board mutation, and on any failure undo the board mutation
//! and pop the snapshot before raising. A rejected command therefore leaves
//! the game exactly as it was.

use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::core::{GameError, PlayerId, Position, Wall};
use crate::game::path;
use crate::game::snapshot::Snapshot;
use crate::game::state::{GameState, GameStatus, Goal};

/// Default number of walls granted to each player.
pub const DEFAULT_WALL_BUDGET: u32 = 10;

/// A two-player match: board, budgets, turn/win status, and history.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    wall_budget: u32,
    walls_remaining: FxHashMap<PlayerId, u32>,
    goals: FxHashMap<PlayerId, Goal>,
    /// Registration order; also the turn order.
    players: Vec<PlayerId>,
    state: GameState,
    history: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl Game {
    /// Create a game around a board with the default wall budget.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_budget(board, DEFAULT_WALL_BUDGET)
    }

    /// Create a game with a custom per-player wall budget.
    #[must_use]
    pub fn with_budget(board: Board, wall_budget: u32) -> Self {
        Self {
            board,
            wall_budget,
            walls_remaining: FxHashMap::default(),
            goals: FxHashMap::default(),
            players: Vec::new(),
            state: GameState {
                turn: PlayerId::new(0),
                status: GameStatus::InProgress,
            },
            history: Vec::new(),
            redo: Vec::new(),
        }
    }

    // === Registration ===

    /// Register a player with the default goal for their seat: the first
    /// player races to the top row, the second to row 0.
    ///
    /// Fails with [`GameError::MaxPlayersReached`] once two players are
    /// registered. Grants the configured wall budget.
    pub fn add_player(&mut self, player: PlayerId) -> Result<(), GameError> {
        let goal = match self.players.len() {
            0 => Goal::row(self.board.size() - 1),
            1 => Goal::row(0),
            _ => return Err(GameError::MaxPlayersReached),
        };
        self.add_player_with_goal(player, goal)
    }

    /// Register a player with an explicit goal.
    pub fn add_player_with_goal(&mut self, player: PlayerId, goal: Goal) -> Result<(), GameError> {
        if self.players.len() >= 2 {
            return Err(GameError::MaxPlayersReached);
        }
        assert!(
            !self.players.contains(&player),
            "{player} is already registered"
        );

        self.players.push(player);
        self.walls_remaining.insert(player, self.wall_budget);
        self.goals.insert(player, goal);
        if self.players.len() == 1 {
            self.state.turn = player;
        }
        Ok(())
    }

    // === Play ===

    /// Place a wall for `player`.
    ///
    /// Checked in order: registration, game over, turn, budget, board
    /// legality, and finally the connectivity invariant for *every*
    /// registered player. A placement that would leave any player without
    /// a path to their goal is rolled back and rejected with
    /// [`GameError::PathBlocked`].
    ///
    /// On success the player's budget drops by one and the turn switches.
    pub fn place_wall(&mut self, player: PlayerId, wall: Wall) -> Result<(), GameError> {
        if !self.players.contains(&player) {
            return Err(GameError::NotInGame(player));
        }
        if self.state.status.is_over() {
            return Err(GameError::GameEnded);
        }
        if self.state.turn != player {
            return Err(GameError::WrongTurn(player));
        }

        self.history.push(self.snapshot());
        self.redo.clear();

        if self.walls_remaining.get(&player).copied().unwrap_or(0) == 0 {
            self.history.pop();
            return Err(GameError::NoWallsRemaining(player));
        }

        if let Err(err) = self.board.place_wall(wall) {
            self.history.pop();
            return Err(err.into());
        }

        for &registered in &self.players {
            if !self.player_has_path(registered) {
                self.board.remove_last_wall();
                self.history.pop();
                return Err(GameError::PathBlocked(registered));
            }
        }

        if let Some(remaining) = self.walls_remaining.get_mut(&player) {
            *remaining -= 1;
        }
        self.switch_turn();
        Ok(())
    }

    /// Move a player's pawn to `target`.
    ///
    /// Board legality (steps, jumps, blocking walls) is delegated to
    /// [`Board::move_pawn`]. Reaching the player's goal row sets the win
    /// status and leaves the turn with the winner; otherwise the turn
    /// switches. Pawn moves can never sever a path, so the connectivity
    /// invariant is not re-checked here.
    pub fn move_pawn(&mut self, player: PlayerId, target: Position) -> Result<(), GameError> {
        if self.state.status.is_over() {
            return Err(GameError::GameEnded);
        }
        if self.state.turn != player {
            return Err(GameError::WrongTurn(player));
        }

        self.history.push(self.snapshot());

        if let Err(err) = self.board.move_pawn(player, target) {
            self.history.pop();
            return Err(err.into());
        }
        self.redo.clear();

        match self.goals.get(&player) {
            Some(goal) if goal.reached(&target) => {
                self.state.status = GameStatus::Won(player);
            }
            _ => self.switch_turn(),
        }
        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(&next) = self.players.iter().find(|&&p| p != self.state.turn) {
            self.state.turn = next;
        }
    }

    fn player_has_path(&self, player: PlayerId) -> bool {
        let (Some(start), Some(&goal)) = (self.board.pawn(player), self.goals.get(&player)) else {
            // A player with no pawn on the board has no path to protect.
            return true;
        };
        path::has_path(&self.board, start, goal)
    }

    // === History ===

    /// Undo the most recent successful mutation.
    ///
    /// The current state is pushed onto the redo stack and the popped
    /// snapshot is restored wholesale: the board is rebuilt from the copied
    /// pawns plus wall-by-wall replay, then turn, status, and budgets are
    /// replaced. Undoing a winning move returns the game to in-progress.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let snapshot = self.history.pop().ok_or(GameError::NothingToUndo)?;
        let current = self.snapshot();
        self.redo.push(current);
        self.restore(snapshot);
        Ok(())
    }

    /// Redo the most recently undone mutation. Symmetric to [`Game::undo`];
    /// redoing a winning move restores the win.
    pub fn redo(&mut self) -> Result<(), GameError> {
        let snapshot = self.redo.pop().ok_or(GameError::NothingToRedo)?;
        let current = self.snapshot();
        self.history.push(current);
        self.restore(snapshot);
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board, self.state, &self.walls_remaining)
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = Board::from_parts(self.board.size(), snapshot.pawns, &snapshot.walls);
        self.state = snapshot.state;
        self.walls_remaining = snapshot.walls_remaining;
    }

    // === Accessors (all side-effect-free) ===

    /// Current turn and status.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Defensive copy of the remaining-wall map.
    #[must_use]
    pub fn remaining_walls(&self) -> FxHashMap<PlayerId, u32> {
        self.walls_remaining.clone()
    }

    /// A player's pawn position, if they have one on the board.
    #[must_use]
    pub fn pawn_position(&self, player: PlayerId) -> Option<Position> {
        self.board.pawn(player)
    }

    /// Whether a wall blocks movement between two adjacent squares.
    #[must_use]
    pub fn is_wall_between(&self, a: Position, b: Position) -> bool {
        self.board.is_wall_between(a, b)
    }

    /// Registered players in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// A player's goal, if registered.
    #[must_use]
    pub fn goal(&self, player: PlayerId) -> Option<Goal> {
        self.goals.get(&player).copied()
    }

    /// The per-player wall budget this game was created with.
    #[must_use]
    pub fn wall_budget(&self) -> u32 {
        self.wall_budget
    }
}

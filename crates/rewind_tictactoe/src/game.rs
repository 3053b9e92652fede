//! The game controller.
//!
//! `Game` owns the only mutable state in the system: the history of board
//! snapshots and the pointer to the one on display. Every operation runs a
//! pure transition from [`history`](super::history) or
//! [`action`](super::action) and then assigns the result.

use super::action::{MoveError, apply_move};
use super::history::{GameHistory, HistoryError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::types::{Board, Player};
use super::view::{BoardView, DrawPolicy, MoveEntry, Status, move_list};
use tracing::{debug, info, instrument, warn};

/// Error returned by [`Game`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The move was rejected.
    #[display("{_0}")]
    Move(MoveError),
    /// The history transition was rejected.
    #[display("{_0}")]
    History(HistoryError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::History(e) => Some(e),
        }
    }
}

/// Tic-tac-toe with time travel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    history: GameHistory,
}

impl Game {
    /// Creates a new game: one empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
        }
    }

    /// Returns the history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.history.current_move()
    }

    /// The snapshot on display.
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// The player who moves next from the snapshot on display.
    pub fn next_player(&self) -> Player {
        self.history.next_player()
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// Any snapshots after the current one are discarded first.
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn play(&mut self, index: usize) -> Result<(), GameError> {
        let next_board = apply_move(self.history.current(), index, self.history.is_x_next())?;
        self.history = self.history.with_move(next_board)?;
        info!(move_number = self.history.current_move(), "Move played");
        self.check_invariants();
        Ok(())
    }

    /// Click on a cell: plays the move if legal, otherwise does nothing.
    ///
    /// Returns whether the game state changed.
    #[instrument(skip(self))]
    pub fn click(&mut self, index: usize) -> bool {
        match self.play(index) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Ignoring illegal click");
                false
            }
        }
    }

    /// Shows snapshot `index` without changing the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history = self.history.with_jump(index)?;
        debug!(index, "Jumped");
        self.check_invariants();
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.history = GameHistory::new();
    }

    /// Status line for the snapshot on display.
    pub fn status(&self, policy: DrawPolicy) -> Status {
        Status::of(self.history.current(), self.history.is_x_next(), policy)
    }

    /// Cells and status for the snapshot on display.
    pub fn view(&self, policy: DrawPolicy) -> BoardView {
        BoardView::new(self.history.current(), self.history.is_x_next(), policy)
    }

    /// History list entries.
    pub fn moves(&self) -> Vec<MoveEntry> {
        move_list(&self.history)
    }

    /// Logs any broken invariant; panics in debug builds.
    fn check_invariants(&self) {
        if let Err(violations) = HistoryInvariants::check_all(&self.history) {
            for violation in &violations {
                warn!(%violation, "History invariant violated");
            }
            debug_assert!(violations.is_empty(), "History invariants violated: {:?}", violations);
        }
    }
}

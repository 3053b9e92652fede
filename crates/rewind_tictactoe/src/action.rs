//! Move validation and application.
//!
//! A move is validated against the board it is played on and produces a
//! new board. The input board is only borrowed, so a rejected or accepted
//! move leaves the caller's snapshot exactly as it was.

use super::rules::detect_winner;
use super::types::{Board, CELL_COUNT, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IllegalMoveReason {
    /// The index is not in 0-8.
    #[display("index is off the board")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The board already has a winner.
    #[display("game is already decided")]
    GameDecided,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move is not allowed on this board.
    #[display("Illegal move at {index}: {reason}")]
    IllegalMove {
        /// Requested cell index.
        index: usize,
        /// What made the move illegal.
        reason: IllegalMoveReason,
    },
}

impl MoveError {
    /// Returns the rejection reason.
    pub fn reason(&self) -> IllegalMoveReason {
        match self {
            MoveError::IllegalMove { reason, .. } => *reason,
        }
    }
}

impl std::error::Error for MoveError {}

/// Places the mark of the player to move at `index`, returning the new board.
///
/// Fails when `index` is off the board, when the cell is occupied, or when
/// the board already has a winner. Occupancy is checked before the winner so
/// that clicking a marked cell on a decided board reports `Occupied`.
#[instrument]
pub fn apply_move(board: &Board, index: usize, is_x_turn: bool) -> Result<Board, MoveError> {
    let illegal = |reason| MoveError::IllegalMove { index, reason };

    if index >= CELL_COUNT {
        return Err(illegal(IllegalMoveReason::OutOfBounds));
    }
    if !board.is_empty_at(index) {
        return Err(illegal(IllegalMoveReason::Occupied));
    }
    if !detect_winner(board).is_empty() {
        return Err(illegal(IllegalMoveReason::GameDecided));
    }

    let player = if is_x_turn { Player::X } else { Player::O };
    let next = board
        .with(index, Cell::from(player))
        .ok_or_else(|| illegal(IllegalMoveReason::OutOfBounds))?;
    debug!(index, %player, "Move applied");
    Ok(next)
}

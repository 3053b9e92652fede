//! Linear move history with time travel.
//!
//! History is an ordered list of board snapshots. Entry 0 is the empty
//! board and entry `i` is the board after move `i`. A pointer (the current
//! move) selects the snapshot on display. Playing from an earlier snapshot
//! drops every snapshot after it before appending, so history is always a
//! single line of play.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Error raised by history transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested index does not name a snapshot.
    #[display("Move {index} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
    /// A serialized history broke a structural rule.
    #[display("Malformed history: {_0}")]
    Malformed(&'static str),
}

impl std::error::Error for HistoryError {}

/// Returns `history[0..=at_move]` followed by `new_board`.
///
/// The result has length `at_move + 2` and its prefix is identical to the
/// input's. The input slice is not modified.
#[instrument(skip(history, new_board), fields(len = history.len()))]
pub fn append(
    history: &[Board],
    at_move: usize,
    new_board: Board,
) -> Result<Vec<Board>, HistoryError> {
    if at_move >= history.len() {
        warn!(at_move, "Append past end of history rejected");
        return Err(HistoryError::OutOfRange {
            index: at_move,
            len: history.len(),
        });
    }

    let mut next = Vec::with_capacity(at_move + 2);
    next.extend_from_slice(&history[..=at_move]);
    next.push(new_board);

    let dropped = history.len() - (at_move + 1);
    if dropped > 0 {
        debug!(dropped, "Discarded snapshots after the branch point");
    }
    Ok(next)
}

/// Validates a jump target against the history length.
#[instrument]
pub fn jump_to(index: usize, history_len: usize) -> Result<usize, HistoryError> {
    if index >= history_len {
        warn!("Jump target out of range");
        return Err(HistoryError::OutOfRange {
            index,
            len: history_len,
        });
    }
    Ok(index)
}

/// Board snapshots plus the pointer to the one on display.
///
/// `GameHistory` is a value: transitions return a new history and leave
/// the receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current_move: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    current_move: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        match raw.snapshots.first() {
            None => return Err(HistoryError::Malformed("no snapshots")),
            Some(first) if *first != Board::new() => {
                return Err(HistoryError::Malformed("first snapshot is not empty"));
            }
            Some(_) => {}
        }
        let current_move = jump_to(raw.current_move, raw.snapshots.len())?;
        let history = Self {
            snapshots: raw.snapshots,
            current_move,
        };
        if let Err(violations) = HistoryInvariants::check_all(&history) {
            warn!(?violations, "Deserialized history rejected");
            let first = violations
                .first()
                .map_or("invariant violated", |violation| violation.description);
            return Err(HistoryError::Malformed(first));
        }
        Ok(history)
    }
}

impl GameHistory {
    /// A fresh history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot on display.
    pub fn current(&self) -> &Board {
        // current_move < len is upheld by every constructor and transition.
        &self.snapshots[self.current_move]
    }

    /// Whether X moves next from the current snapshot.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player who moves next from the current snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Appends `new_board` after the current snapshot and moves to it.
    #[instrument(skip(self, new_board), fields(current_move = self.current_move))]
    pub fn with_move(&self, new_board: Board) -> Result<Self, HistoryError> {
        let snapshots = append(&self.snapshots, self.current_move, new_board)?;
        let current_move = snapshots.len() - 1;
        debug!(current_move, "History advanced");
        Ok(Self {
            snapshots,
            current_move,
        })
    }

    /// Moves the pointer to `index` without touching the snapshots.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn with_jump(&self, index: usize) -> Result<Self, HistoryError> {
        let current_move = jump_to(index, self.snapshots.len())?;
        Ok(Self {
            snapshots: self.snapshots.clone(),
            current_move,
        })
    }

    /// Builds a history without checking its invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current_move: usize) -> Self {
        Self {
            snapshots,
            current_move,
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

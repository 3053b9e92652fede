//! Initial board invariant: history starts from the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: entry 0 exists and is the empty board.
pub struct InitialBoardEmpty;

impl Invariant<GameHistory> for InitialBoardEmpty {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

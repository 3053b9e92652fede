//! Pointer invariant: the current move names an existing snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `current_move < len`.
pub struct CurrentMoveInRange;

impl Invariant<GameHistory> for CurrentMoveInRange {
    fn holds(history: &GameHistory) -> bool {
        history.current_move() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Current move points at an existing snapshot"
    }
}

//! Move-by-move invariant: each snapshot adds exactly one mark.

use super::super::{Cell, GameHistory, Player};
use super::Invariant;

/// Invariant: snapshot `i > 0` equals snapshot `i - 1` plus one mark.
///
/// The new mark sits on a previously empty cell and belongs to the player
/// whose turn it was: X for odd `i`, O for even `i`.
pub struct SnapshotsAdvanceByOneMark;

impl Invariant<GameHistory> for SnapshotsAdvanceByOneMark {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let expected = Cell::from(Player::for_move(i));
                let mut changed = pair[0]
                    .cells()
                    .iter()
                    .zip(pair[1].cells())
                    .filter(|(before, after)| before != after);
                matches!(
                    (changed.next(), changed.next()),
                    (Some((Cell::Empty, after)), None) if *after == expected
                )
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player to move"
    }
}

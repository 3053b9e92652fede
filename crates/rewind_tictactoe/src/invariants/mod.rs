//! First-class invariants over game history.
//!
//! Invariants are properties every reachable [`GameHistory`] satisfies.
//! The game controller checks them after each transition in debug builds.

use super::GameHistory;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation {
                            description: $inv::description(),
                        });
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod current_move;
pub mod initial_board;
pub mod one_mark_per_move;

pub use current_move::CurrentMoveInRange;
pub use initial_board::InitialBoardEmpty;
pub use one_mark_per_move::SnapshotsAdvanceByOneMark;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    InitialBoardEmpty,
    CurrentMoveInRange,
    SnapshotsAdvanceByOneMark,
);

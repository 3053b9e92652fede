//! What the presentation layer shows: cells, status line and history list.

use super::history::GameHistory;
use super::position::Position;
use super::rules::{detect_winner, is_draw};
use super::types::{Board, CELL_COUNT, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a full board with no winner is reported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DrawPolicy {
    /// Show a draw status once the board fills up without a line.
    #[default]
    Report,
    /// Keep showing "Next player" on a full board.
    Silent,
}

/// Status line for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
    /// The board is full and nobody won.
    #[display("Draw")]
    Draw,
}

impl Status {
    /// Status of `board` when `is_x_next` says whose turn it is.
    #[instrument]
    pub fn of(board: &Board, is_x_next: bool, policy: DrawPolicy) -> Self {
        if let Some(winner) = detect_winner(board).player() {
            return Status::Winner(winner);
        }
        if policy == DrawPolicy::Report && is_draw(board) {
            return Status::Draw;
        }
        Status::NextPlayer(if is_x_next { Player::X } else { Player::O })
    }

    /// Whether further moves are refused from this status.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Everything needed to draw the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cell values in row-major order.
    pub cells: [Cell; CELL_COUNT],
    /// Status line.
    pub status: Status,
}

impl BoardView {
    /// Renders `board` with whose turn it is.
    pub fn new(board: &Board, is_x_next: bool, policy: DrawPolicy) -> Self {
        Self {
            cells: *board.cells(),
            status: Status::of(board, is_x_next, policy),
        }
    }
}

/// One entry of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button label.
    pub label: String,
    /// The mark placed by this move, absent for the start entry.
    pub placed: Option<(Player, Position)>,
    /// Whether this entry is the snapshot on display.
    pub current: bool,
}

/// Label for history entry `index`.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}

/// The cell that differs between two consecutive snapshots.
fn placed_between(before: &Board, after: &Board) -> Option<(Player, Position)> {
    Position::ALL.into_iter().find_map(|pos| {
        let index = pos.to_index();
        match (before.get(index), after.get(index)) {
            (Some(Cell::Empty), Some(cell)) => cell.player().map(|p| (p, pos)),
            _ => None,
        }
    })
}

/// History list entries for every snapshot, oldest first.
#[instrument(skip(history), fields(len = history.len()))]
pub fn move_list(history: &GameHistory) -> Vec<MoveEntry> {
    let snapshots = history.snapshots();
    (0..snapshots.len())
        .map(|index| {
            let placed = index
                .checked_sub(1)
                .and_then(|prev| placed_between(&snapshots[prev], &snapshots[index]));
            MoveEntry::new(index, move_label(index), placed, index == history.current_move())
        })
        .collect()
}

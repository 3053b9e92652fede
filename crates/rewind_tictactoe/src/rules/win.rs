//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Position};
use tracing::instrument;

/// The eight winning triples, scanned in this order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line whose three cells hold the same mark.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    let cells = board.cells();
    LINES.into_iter().find(|[a, b, c]| {
        let first = cells[a.to_index()];
        !first.is_empty() && first == cells[b.to_index()] && first == cells[c.to_index()]
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the winning mark, or [`Cell::Empty`] when no line is complete.
/// A full board without a line also returns `Empty`; see
/// [`is_draw`](super::is_draw).
#[instrument]
pub fn detect_winner(board: &Board) -> Cell {
    winning_line(board)
        .map(|[a, _, _]| board.cells()[a.to_index()])
        .unwrap_or(Cell::Empty)
}

#[cfg(kani)]
mod verification {
    use super::*;

    fn any_cell() -> Cell {
        match kani::any::<u8>() % 3 {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        }
    }

    #[kani::proof]
    fn winner_owns_a_complete_line() {
        let board = Board::from_cells(std::array::from_fn(|_| any_cell()));
        let winner = detect_winner(&board);
        if !winner.is_empty() {
            let line = winning_line(&board);
            kani::assert(line.is_some(), "winner implies a winning line");
        }
    }
}

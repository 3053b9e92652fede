//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::detect_winner;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && detect_winner(board).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with(4, Cell::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    #[rustfmt::skip]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_cells([
            Cell::X, Cell::O, Cell::X,
            Cell::O, Cell::X, Cell::X,
            Cell::O, Cell::X, Cell::O,
        ]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    #[rustfmt::skip]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        let board = Board::from_cells([
            Cell::X, Cell::X, Cell::X,
            Cell::O, Cell::O, Cell::X,
            Cell::O, Cell::X, Cell::O,
        ]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Player whose turn it is after `move_number` moves.
    ///
    /// X moves on even move numbers, O on odd.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Returns true when no player has marked the cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Display symbol, blank for an empty cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::X => "X",
            Cell::O => "O",
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is a value: there is no way to change a cell in place. Placing a
/// mark goes through [`Board::with`], which returns a new board and leaves
/// the original untouched, so snapshots held in a history stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns a copy of this board with `index` set to `cell`.
    ///
    /// Returns `None` when `index` is off the board.
    #[instrument(skip(self))]
    pub fn with(&self, index: usize, cell: Cell) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let mut cells = self.cells;
        cells[index] = cell;
        Some(Self { cells })
    }

    /// Checks if the cell at `index` is empty. Off-board indices are not.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based key so the grid doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&(index + 1).to_string()),
                    cell => result.push_str(cell.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl From<[Cell; CELL_COUNT]> for Board {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self::from_cells(cells)
    }
}

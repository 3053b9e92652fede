//! Pure tic-tac-toe logic with linear move history and time travel.
//!
//! Boards are immutable values. A [`GameHistory`] holds every snapshot from
//! the empty board to the furthest move on the current line of play, plus a
//! pointer to the snapshot on display. Jumping moves the pointer; playing
//! from an earlier snapshot discards the later ones and appends the new
//! board.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{DrawPolicy, Game};
//!
//! let mut game = Game::new();
//! game.play(0).unwrap();
//! game.play(4).unwrap();
//! game.jump_to(1).unwrap();
//! game.play(8).unwrap();
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(DrawPolicy::Report).to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod action;
mod game;
pub mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{IllegalMoveReason, MoveError, apply_move};
pub use game::{Game, GameError};
pub use history::{GameHistory, HistoryError, append, jump_to};
pub use position::{Direction, Position};
pub use rules::{detect_winner, is_draw, is_full, winning_line};
pub use types::{Board, CELL_COUNT, Cell, Player};
pub use view::{BoardView, DrawPolicy, MoveEntry, Status, move_label, move_list};

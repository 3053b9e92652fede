//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) snapshot. Rules never
//! look at history or turn order; callers combine them with whatever
//! state they hold.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, detect_winner, winning_line};

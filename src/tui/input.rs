//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rewind_tictactoe::Direction;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the history selection.
    Navigate(Direction),
    /// Place a mark at the cursor, or jump to the selected history entry.
    Select,
    /// Place a mark directly at a cell index (keys 1-9).
    PlaceAt(usize),
    /// Switch focus between the board and the history list.
    ToggleFocus,
    /// Start over.
    Restart,
    /// Leave the app.
    Quit,
}

/// Maps a key event to an action, ignoring releases and unbound keys.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .map(|d| Action::PlaceAt(d as usize - 1)),
        _ => None,
    }
}

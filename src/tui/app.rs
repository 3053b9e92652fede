//! Application state and logic.

use rewind_tictactoe::{BoardView, Direction, DrawPolicy, Game, MoveEntry, Position, Status};
use tracing::{debug, instrument, warn};

use super::input::Action;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The history list.
    History,
}

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the app.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    draw_policy: DrawPolicy,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(draw_policy: DrawPolicy) -> Self {
        Self {
            game: Game::new(),
            draw_policy,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Cells and status on display.
    pub fn view(&self) -> BoardView {
        self.game.view(self.draw_policy)
    }

    /// Status on display.
    pub fn status(&self) -> Status {
        self.game.status(self.draw_policy)
    }

    /// Whether the board takes moves: focused and the game not yet decided.
    pub fn board_active(&self) -> bool {
        self.focus == Focus::Board && !self.status().is_over()
    }

    /// History list entries.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.game.moves()
    }

    /// Applies one user action.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle(&mut self, action: Action) -> Flow {
        self.message = None;
        match action {
            Action::Quit => return Flow::Quit,
            Action::Restart => {
                self.game.restart();
                self.selected = 0;
                self.message = Some("New game".to_string());
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.game.current_move();
            }
            Action::PlaceAt(index) => self.place(index),
            Action::Navigate(direction) => self.navigate(direction),
            Action::Select => match self.focus {
                Focus::Board => self.place(self.cursor.to_index()),
                Focus::History => self.jump(self.selected),
            },
        }
        Flow::Continue
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = self.cursor.step(direction),
            Focus::History => {
                let last = self.game.history().len() - 1;
                self.selected = match direction {
                    Direction::Up => self.selected.saturating_sub(1),
                    Direction::Down => (self.selected + 1).min(last),
                    Direction::Left | Direction::Right => self.selected,
                };
            }
        }
    }

    fn place(&mut self, index: usize) {
        if self.game.click(index) {
            self.selected = self.game.current_move();
            if let Some(position) = Position::from_index(index) {
                self.cursor = position;
            }
        } else if self.status().is_over() {
            debug!(index, "Click after game end ignored");
            self.message = Some("Game over. Jump back or restart".to_string());
        } else {
            debug!(index, "Click ignored");
        }
    }

    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => self.message = Some(format!("Showing move #{}", index)),
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.message = Some(e.to_string());
            }
        }
    }
}

//! Headless replay: play a list of moves and report the result.

use anyhow::{Context, Result};
use rewind_tictactoe::{BoardView, Game, MoveEntry};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::Settings;

/// Result of a replay, as printed by `rewind replay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// History index on display.
    pub current_move: usize,
    /// Board and status on display.
    pub view: BoardView,
    /// Grid rendering of the board on display.
    pub grid: String,
    /// History list.
    pub history: Vec<MoveEntry>,
}

/// Plays `moves` from a fresh game, then jumps to `jump` if given.
///
/// Unlike a click in the terminal UI, an illegal move here is an error:
/// the caller asked for a specific line of play.
#[instrument(skip(settings))]
pub fn replay(moves: &[u8], jump: Option<usize>, settings: &Settings) -> Result<ReplayReport> {
    let mut game = Game::new();
    for (n, &index) in moves.iter().enumerate() {
        game.play(usize::from(index))
            .with_context(|| format!("move {} (cell {}) could not be played", n + 1, index))?;
    }
    if let Some(target) = jump {
        game.jump_to(target)
            .with_context(|| format!("cannot jump to move {}", target))?;
    }
    info!(current_move = game.current_move(), "Replay finished");

    Ok(ReplayReport {
        current_move: game.current_move(),
        view: game.view(*settings.draw_policy()),
        grid: game.current_board().display(),
        history: game.moves(),
    })
}

impl ReplayReport {
    /// Plain-text rendering: grid, status, then the history list.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n", self.grid, self.view.status);
        for entry in &self.history {
            let marker = if entry.current { '>' } else { ' ' };
            out.push_str(&format!("{} {}", marker, entry.label));
            if let Some((player, position)) = entry.placed {
                out.push_str(&format!(" ({} {})", player, position));
            }
            out.push('\n');
        }
        out
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize replay")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Player, Status};

    #[test]
    fn test_replay_to_win() {
        let report = replay(&[0, 1, 4, 2, 8], None, &Settings::default()).unwrap();
        assert_eq!(report.current_move, 5);
        assert_eq!(report.view.status, Status::Winner(Player::X));
        assert_eq!(report.history.len(), 6);
    }

    #[test]
    fn test_replay_with_jump() {
        let report = replay(&[0, 1, 4], Some(1), &Settings::default()).unwrap();
        assert_eq!(report.current_move, 1);
        assert_eq!(report.view.status.to_string(), "Next player: O");
        assert_eq!(report.history.len(), 4);
    }

    #[test]
    fn test_replay_rejects_occupied_cell() {
        let err = replay(&[4, 4], None, &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("move 2 (cell 4)"));
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        assert!(replay(&[4], Some(5), &Settings::default()).is_err());
    }

    #[test]
    fn test_text_output() {
        let report = replay(&[0], None, &Settings::default()).unwrap();
        assert_eq!(
            report.to_text(),
            concat!(
                "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\n",
                "Next player: O\n\n",
                "  Go to start\n",
                "> Go to move #1 (X Top-left)\n",
            )
        );
    }

    #[test]
    fn test_json_output() {
        let report = replay(&[4], None, &Settings::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["current_move"], 1);
        assert_eq!(value["view"]["cells"][4], "X");
        assert_eq!(value["history"][1]["label"], "Go to move #1");
    }
}

//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::DrawPolicy;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional, defaults apply when missing)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Override the draw policy from the settings file
    #[arg(long, global = true)]
    pub draw_policy: Option<DrawPolicy>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Cell indices (0-8, row-major) to play in order
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        moves: Vec<u8>,

        /// History entry to show after the moves are played
        #[arg(long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
        assert_eq!(cli.draw_policy, None);
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["rewind", "replay", "0", "4", "8", "--jump", "1", "--json"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 4, 8],
                jump: Some(1),
                json: true,
            })
        );
    }

    #[test]
    fn test_replay_rejects_off_board_index() {
        assert!(Cli::try_parse_from(["rewind", "replay", "9"]).is_err());
    }

    #[test]
    fn test_draw_policy_flag() {
        let cli = Cli::try_parse_from(["rewind", "--draw-policy", "silent", "play"]).unwrap();
        assert_eq!(cli.draw_policy, Some(DrawPolicy::Silent));
        assert_eq!(cli.command, Some(Command::Play));
    }

    #[test]
    fn test_command_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

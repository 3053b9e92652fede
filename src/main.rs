//! Rewind - unified CLI

use anyhow::Result;
use clap::Parser;
use rewind::cli::{Cli, Command};
use rewind::{replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.clone().unwrap_or(Command::Play) {
        // The log file location is itself a setting; tui::run opens it and
        // records the settings in effect.
        Command::Play => tui::run(&rewind::load_settings(&cli)?),
        Command::Replay { moves, jump, json } => {
            rewind::init_stderr_tracing();
            let settings = rewind::load_settings(&cli)?;
            info!(moves = moves.len(), "Replaying");
            let report = replay::replay(&moves, jump, &settings)?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_text());
            }
            Ok(())
        }
    }
}

//! Rewind - tic-tac-toe with move history and time travel
//!
//! The game logic lives in [`rewind_tictactoe`]; this crate adds the
//! terminal UI, a headless replay command, settings and logging.
//!
//! # Example
//!
//! ```
//! use rewind::{Settings, replay::replay};
//!
//! # fn example() -> anyhow::Result<()> {
//! let report = replay(&[0, 3, 4, 5, 8], None, &Settings::default())?;
//! assert_eq!(report.view.status.to_string(), "Winner: X");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use config::{ConfigError, Settings};
pub use rewind_tictactoe as game;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends logs to stderr. Used by the headless commands.
pub fn init_stderr_tracing() {
    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Sends logs to `path`, truncating it. Used by the terminal UI.
pub fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Loads the settings named on the command line and applies its overrides.
///
/// Install a subscriber first if the load itself should be logged.
pub fn load_settings(cli: &cli::Cli) -> Result<Settings> {
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    Ok(match cli.draw_policy {
        Some(policy) => {
            info!(draw_policy = %policy, "Draw policy overridden on the command line");
            settings.with_draw_policy(policy)
        }
        None => settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rewind_tictactoe::DrawPolicy;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged_while(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_load_settings_is_logged_under_installed_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml").display().to_string();
        let cli = cli::Cli::try_parse_from([
            "rewind",
            "--config",
            &path,
            "--draw-policy",
            "silent",
            "replay",
        ])
        .unwrap();

        let mut loaded = None;
        let logs = logged_while(|| loaded = Some(load_settings(&cli).unwrap()));

        assert_eq!(loaded.unwrap().draw_policy(), &DrawPolicy::Silent);
        assert!(logs.contains("Config file not found, using defaults"));
        assert!(logs.contains("Draw policy overridden on the command line"));
    }

    #[test]
    fn test_load_settings_reports_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms = 0").unwrap();
        let path = file.path().display().to_string();
        let cli = cli::Cli::try_parse_from(["rewind", "-c", &path]).unwrap();
        let err = load_settings(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("tick_rate_ms must be greater than zero"));
    }
}

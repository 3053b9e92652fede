//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::DrawPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal UI and replay output.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Whether a full board without a winner shows "Draw".
    draw_policy: DrawPolicy,

    /// File the terminal UI writes its log to.
    log_file: PathBuf,

    /// Input poll interval for the terminal UI, in milliseconds.
    tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            draw_policy: DrawPolicy::default(),
            log_file: PathBuf::from("rewind.log"),
            tick_rate_ms: 100,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(draw_policy = %settings.draw_policy, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if settings.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than zero".to_string()));
        }
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the draw policy.
    pub fn with_draw_policy(mut self, draw_policy: DrawPolicy) -> Self {
        self.draw_policy = draw_policy;
        self
    }

    /// Poll interval as a [`Duration`](std::time::Duration).
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml("draw_policy = \"silent\"\n").unwrap();
        assert_eq!(*settings.draw_policy(), DrawPolicy::Silent);
        assert_eq!(*settings.tick_rate_ms(), 100);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_toml("board_size = 4\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        assert!(Settings::from_toml("tick_rate_ms = 0\n").is_err());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}

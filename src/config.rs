//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Mark;
use tracing::{debug, info, instrument};

/// User-configurable display and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol shown for the first player's mark.
    #[serde(default = "default_mark_a_label")]
    mark_a_label: String,

    /// Symbol shown for the second player's mark.
    #[serde(default = "default_mark_b_label")]
    mark_b_label: String,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: String,
}

fn default_mark_a_label() -> String {
    "X".to_string()
}

fn default_mark_b_label() -> String {
    "O".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "tictactoe.log".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mark_a_label: default_mark_a_label(),
            mark_b_label: default_mark_b_label(),
            log_filter: default_log_filter(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            mark_a = %config.mark_a_label,
            mark_b = %config.mark_b_label,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.mark_a_label.trim().is_empty() || config.mark_b_label.trim().is_empty() {
            return Err(ConfigError::new("Mark labels must not be empty".to_string()));
        }
        if config.mark_a_label.trim() == config.mark_b_label.trim() {
            return Err(ConfigError::new(format!(
                "Mark labels must differ (both are {:?})",
                config.mark_a_label
            )));
        }
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the display symbol for `mark`.
    pub fn label(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.mark_a_label,
            Mark::O => &self.mark_b_label,
        }
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
    #[instrument(skip(message))]
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
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.label(Mark::X), "X");
        assert_eq!(config.log_file(), "tictactoe.log");
    }

    #[test]
    fn test_partial_override() {
        let config = GameConfig::from_toml("mark_b_label = \"@\"\n").unwrap();
        assert_eq!(config.label(Mark::O), "@");
        assert_eq!(config.label(Mark::X), "X");
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_rejects_identical_labels() {
        let err = GameConfig::from_toml("mark_a_label = \"O\"\n").unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_rejects_labels_differing_only_in_whitespace() {
        let err = GameConfig::from_toml("mark_a_label = \"O \"\n").unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_error_records_call_site() {
        let err = GameConfig::from_toml("mark_b_label = \"\"\n").unwrap_err();
        assert!(err.file.ends_with("config.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = GameConfig::from_toml("mark_a_label = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}

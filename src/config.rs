//! Table configuration loaded from TOML.

use crate::theme::ThemeChoice;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Presentation and logging options for a table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TableConfig {
    /// Color scheme.
    #[serde(default)]
    theme: ThemeChoice,

    /// Turn the top board 180° for the player across the table.
    #[serde(default = "default_mirror_top")]
    mirror_top: bool,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_mirror_top() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tabletop_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            mirror_top: default_mirror_top(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TableConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(theme = %config.theme, mirror_top = config.mirror_top, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the theme.
    pub fn with_theme(mut self, theme: ThemeChoice) -> Self {
        self.theme = theme;
        self
    }

    /// Overrides mirroring of the top board.
    pub fn with_mirror_top(mut self, mirror_top: bool) -> Self {
        self.mirror_top = mirror_top;
        self
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

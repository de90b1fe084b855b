//! Launcher configuration loaded from TOML.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Marker;
use tracing::{debug, info, instrument};

/// Tracing filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// User-tunable launcher settings.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Marker the human plays. X always moves first, so `O` lets the AI open.
    #[serde(default = "default_human_marker")]
    human_marker: Marker,

    /// Tracing filter directive (e.g. `"info,strictly_tictactoe=debug"`).
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_human_marker() -> Marker {
    Marker::X
}

#[instrument]
fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            human_marker: default_human_marker(),
            log_filter: default_log_filter(),
        }
    }
}

impl LauncherConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human_marker = %config.human_marker, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the human marker.
    #[must_use]
    pub fn with_human_marker(mut self, marker: Marker) -> Self {
        self.human_marker = marker;
        self
    }

    /// Marker played by the AI.
    pub fn ai_marker(&self) -> Marker {
        self.human_marker.opponent()
    }
}

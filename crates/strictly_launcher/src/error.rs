//! Error types for the launcher shell.

use derive_more::{Display, Error};
use strictly_tictactoe::MoveError;
use tracing::instrument;

/// Configuration error with location tracking.
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Anything that can stop the launcher.
#[derive(Debug, Display)]
pub enum LauncherError {
    /// Reading stdin or writing stdout failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Configuration could not be loaded.
    #[display("{}", _0)]
    Config(ConfigError),

    /// The engine refused a move the shell forwarded.
    #[display("Engine rejected move: {}", _0)]
    Move(MoveError),

    /// Input ended before the user finished.
    #[display("Input closed")]
    InputClosed,
}

impl std::error::Error for LauncherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LauncherError::Io(e) => Some(e),
            LauncherError::Config(e) => Some(e),
            LauncherError::Move(e) => Some(e),
            LauncherError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for LauncherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for LauncherError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<MoveError> for LauncherError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

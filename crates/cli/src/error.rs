//! CLI error types.

use std::path::PathBuf;

use calgrid_core::calendar::CalendarError;
use calgrid_core::theme::ThemeError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while preparing or running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

/// Errors that can occur while loading a theme catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Invalid theme catalog: {0}")]
    Parse(String),
    #[error("Monthly theme '{name}' must define 12 palettes, found {count}")]
    InvalidMonthlyTheme { name: String, count: usize },
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

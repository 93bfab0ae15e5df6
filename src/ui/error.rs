//! UI error types

use thiserror::Error;

/// Errors that can occur in frontend operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while drawing or reading events
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The terminal could not be set up or restored
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

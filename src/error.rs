//! Error types for quickadd.
//!
//! Parsing itself is total and never fails; these errors come from the
//! surfaces around it (configuration, I/O, output, the editing session).

use thiserror::Error;

/// Errors that can occur outside the pure parser.
#[derive(Debug, Error)]
pub enum QuickAddError {
    /// Configuration could not be located, read, or written.
    #[error("config error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input rejected by a command (e.g. a task with no title).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An accepted suggestion no longer matches the current input text.
    #[error("suggestion no longer present in input: {0}")]
    SuggestionNotFound(String),
}

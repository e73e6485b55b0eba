//! MoodLens Error Types
//!
//! Centralized error handling for the analysis workflow and its capabilities.

use thiserror::Error;

/// Central error type for MoodLens
#[derive(Error, Debug)]
pub enum MoodError {
    /// The one validation error that is surfaced directly to the user
    #[error("Please enter some text!")]
    EmptyInput,

    #[error("Translation error: {0}")]
    Translate(String),

    #[error("Sentiment scoring error: {0}")]
    Sentiment(String),

    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for MoodLens operations
pub type MoodResult<T> = Result<T, MoodError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for MoodError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        MoodError::Lock(err.to_string())
    }
}

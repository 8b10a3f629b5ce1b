// src/errors.rs

use thiserror::Error;

/// Errors raised by the dashboard outside of the UI event loop.
#[derive(Debug, Error)]
pub enum BuddyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response pool must contain at least one non-blank reply")]
    EmptyResponsePool,

    #[error("Logger error: {0}")]
    Logging(String),
}

impl BuddyError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        BuddyError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        BuddyError::Logging(msg.into())
    }
}

pub type BuddyResult<T> = Result<T, BuddyError>;

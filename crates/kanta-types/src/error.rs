//! Error types for dharam-kanta
//!
//! Every store operation either fully succeeds or fails with one of these
//! kinds; the store's visible state is unchanged on failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing input; correct and resubmit
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced slip does not exist; the caller's view is stale
    #[error("Slip not found: {0}")]
    NotFound(String),

    /// Transition attempted on a slip that is not pending
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying storage failed; nothing was written
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Persistence(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

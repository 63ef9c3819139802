//! Error types for canopi-scan.
//!
//! Extraction itself never fails: every DOM-level fault is absorbed inside
//! the stage where it happens. These errors cover the outbound classification
//! call and configuration, and the orchestrator folds all of them into a
//! typed [`ExtractionResult::Failure`](crate::ExtractionResult).

/// Error type for service and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("API returned {0}")]
    Status(u16),

    /// The response body could not be decoded as a classification payload.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// Options contain a value the pipeline cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type alias for service and configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

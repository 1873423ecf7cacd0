//! Error types for calltools
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while cataloging or executing tools
#[derive(Debug, Error)]
pub enum CalltoolsError {
    /// Tool name is not in the dispatchable set
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A parameter the handler needs was not bound
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Connection failure or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Upstream answered, but with nothing to report
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// Configuration could not be loaded or applied
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CalltoolsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type alias for calltools operations
pub type Result<T> = std::result::Result<T, CalltoolsError>;

//! Error types for the Sentiscope library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for Sentiscope operations.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// The local rate window has no capacity left.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The classification API answered with an error or an unusable payload.
    #[error("API error{}: {message}", status_suffix(.status))]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// Transport-level failure talking to the classification API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input rejected by the validator.
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl SentimentError {
    /// Build an API error without an HTTP status.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
        }
    }

    /// Whether this error came from the local rate limiter.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

/// Result type alias for Sentiscope operations.
pub type Result<T> = std::result::Result<T, SentimentError>;

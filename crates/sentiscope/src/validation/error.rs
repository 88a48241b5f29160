//! Validation error values returned by the validator.

use serde::{Deserialize, Serialize};

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    /// Wrong file type.
    Format,
    /// File exceeds the size limit.
    Size,
    /// A row does not have the expected shape.
    Structure,
    /// Parsed content is empty or unusable.
    Content,
    /// Remote classification failed after retries.
    Api,
}

impl ValidationKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationKind::Format => "format",
            ValidationKind::Size => "size",
            ValidationKind::Structure => "structure",
            ValidationKind::Content => "content",
            ValidationKind::Api => "api",
        }
    }
}

/// A transient validation failure, returned to the caller and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Failure category.
    #[serde(rename = "type")]
    pub kind: ValidationKind,

    /// Short human-readable message.
    pub message: String,

    /// Optional longer explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ValidationError {
    /// Create a new validation error without details.
    pub fn new(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Attach details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

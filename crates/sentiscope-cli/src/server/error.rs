//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use sentiscope::{SentimentError, ValidationError, ValidationKind};

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// Upload or row rejected by the validator.
    Validation(ValidationError),
    /// Error from the sentiment client.
    Sentiment(SentimentError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    fn parts(self) -> (StatusCode, String, String, Option<String>) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request".into(), msg, None),
            ApiError::Validation(err) => {
                let status = match err.kind {
                    ValidationKind::Size => StatusCode::PAYLOAD_TOO_LARGE,
                    ValidationKind::Api => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, err.kind.label().to_string(), err.message, err.details)
            }
            ApiError::Sentiment(SentimentError::RateLimited) => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limit".into(),
                SentimentError::RateLimited.to_string(),
                None,
            ),
            ApiError::Sentiment(SentimentError::Validation(err)) => ApiError::Validation(err).parts(),
            ApiError::Sentiment(err) => (
                StatusCode::BAD_GATEWAY,
                ValidationKind::Api.label().to_string(),
                "Analysis failed".into(),
                Some(err.to_string()),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = self.parts();

        (
            status,
            Json(ErrorResponse {
                error,
                message,
                details,
            }),
        )
            .into_response()
    }
}

impl From<SentimentError> for ApiError {
    fn from(err: SentimentError) -> Self {
        ApiError::Sentiment(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Sentiment(e) => write!(f, "Sentiment error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

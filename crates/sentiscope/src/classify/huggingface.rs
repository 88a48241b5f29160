//! Hugging Face inference API classifier.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SentimentError};
use crate::sentiment::LabelScore;

use super::classifier::Classifier;

/// Hosted inference endpoint; the model id is appended as a path.
pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co/models";

/// Environment variable holding the API key.
const API_KEY_VAR: &str = "HUGGINGFACE_API_KEY";

/// Environment variable overriding the endpoint.
const API_URL_VAR: &str = "SENTISCOPE_API_URL";

/// Classifier backed by the Hugging Face text-classification API.
pub struct HuggingFaceClassifier {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl HuggingFaceClassifier {
    /// Create a classifier for the default endpoint.
    ///
    /// A missing key is allowed; the API will then reject calls.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_endpoint(DEFAULT_API_URL, api_key, Duration::from_secs(30))
    }

    /// Create a classifier for a custom endpoint and request timeout.
    pub fn with_endpoint(
        api_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SentimentError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Create from environment variables.
    ///
    /// Reads `HUGGINGFACE_API_KEY` and, if set, `SENTISCOPE_API_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).ok();
        let api_url = std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_endpoint(api_url, api_key, Duration::from_secs(30))
    }

    /// Whether an API key was supplied.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(ref key) = self.api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", key))
                    .map_err(|e| SentimentError::Config(format!("Invalid API key: {}", e)))?,
            );
        }
        Ok(headers)
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.api_url, model.trim_start_matches('/'))
    }
}

#[async_trait]
impl Classifier for HuggingFaceClassifier {
    async fn classify(&self, model: &str, text: &str) -> Result<Vec<LabelScore>> {
        let response = self
            .client
            .post(self.model_url(model))
            .headers(self.build_headers()?)
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SentimentError::Api {
                status: Some(status.as_u16()),
                message: error_message(&body),
            });
        }

        let body = response.text().await?;
        parse_candidates(&body)
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

/// Response shapes returned by the API for a single input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

/// Error payload returned by the API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Parse candidates from a response body, best score first.
fn parse_candidates(body: &str) -> Result<Vec<LabelScore>> {
    let parsed: ApiResponse = serde_json::from_str(body)
        .map_err(|e| SentimentError::api(format!("Failed to parse API response: {}", e)))?;

    let mut candidates = match parsed {
        ApiResponse::Flat(list) => list,
        ApiResponse::Nested(lists) => lists.into_iter().next().unwrap_or_default(),
    };

    if candidates.is_empty() {
        return Err(SentimentError::api("No classification in API response"));
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(candidates)
}

/// Pull a readable message out of an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_response() {
        let body = r#"[{"label": "NEGATIVE", "score": 0.1}, {"label": "POSITIVE", "score": 0.9}]"#;
        let candidates = parse_candidates(body).unwrap();
        assert_eq!(candidates[0].label, "POSITIVE");
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_parse_nested_response() {
        let body = r#"[[{"label": "NEGATIVE", "score": 0.97}, {"label": "POSITIVE", "score": 0.03}]]"#;
        let candidates = parse_candidates(body).unwrap();
        assert_eq!(candidates[0].label, "NEGATIVE");
        assert_eq!(candidates[0].score, 0.97);
    }

    #[test]
    fn test_parse_empty_response_fails() {
        assert!(matches!(
            parse_candidates("[]"),
            Err(SentimentError::Api { status: None, .. })
        ));
        assert!(parse_candidates("[[]]").is_err());
        assert!(parse_candidates("not json").is_err());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error": "Model is currently loading"}"#),
            "Model is currently loading"
        );
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let classifier = HuggingFaceClassifier::new(Some("  ".to_string())).unwrap();
        assert!(!classifier.has_api_key());
        assert!(classifier.build_headers().unwrap().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_model_url() {
        let classifier =
            HuggingFaceClassifier::with_endpoint("http://localhost:9000/models/", None, Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            classifier.model_url("org/model"),
            "http://localhost:9000/models/org/model"
        );
    }
}

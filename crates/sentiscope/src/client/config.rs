//! Client configuration.

use std::time::Duration;

use super::retry::RetryPolicy;

/// Default classification model.
pub const DEFAULT_MODEL: &str = "distilbert/distilbert-base-uncased-finetuned-sst-2-english";

/// Environment variable overriding the model.
const MODEL_VAR: &str = "SENTISCOPE_MODEL";

/// Configuration for [`SentimentClient`](super::SentimentClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Model identifier sent with every classification call.
    pub model: String,

    /// Calls allowed per rate window.
    pub rate_limit: u32,

    /// Length of the rate window.
    pub rate_window: Duration,

    /// Retry/backoff schedule for failed calls.
    pub retry: RetryPolicy,

    /// Texts classified concurrently per batch chunk.
    pub batch_size: usize,

    /// Pause between batch chunks.
    pub batch_pause: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            rate_limit: 60,
            rate_window: Duration::from_secs(60),
            retry: RetryPolicy::default(),
            batch_size: 10,
            batch_pause: Duration::from_secs(1),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the model taken from `SENTISCOPE_MODEL` if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(model) = std::env::var(MODEL_VAR) {
            if !model.trim().is_empty() {
                config.model = model.trim().to_string();
            }
        }
        config
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the rate window capacity and length.
    pub fn with_rate_limit(mut self, limit: u32, window: Duration) -> Self {
        self.rate_limit = limit;
        self.rate_window = window;
        self
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set chunk size and inter-chunk pause for batches.
    pub fn with_batching(mut self, batch_size: usize, batch_pause: Duration) -> Self {
        self.batch_size = batch_size.max(1);
        self.batch_pause = batch_pause;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.rate_limit, 60);
        assert_eq!(config.rate_window, Duration::from_secs(60));
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.batch_pause, Duration::from_secs(1));
        assert_eq!(config.retry.max_retries, 3);
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        let config = ClientConfig::default().with_batching(0, Duration::ZERO);
        assert_eq!(config.batch_size, 1);
    }
}

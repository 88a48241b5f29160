//! The sentiment client.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::classify::Classifier;
use crate::error::{Result, SentimentError};
use crate::sentiment::SentimentResult;

use super::config::ClientConfig;
use super::rate_limit::{Clock, RateLimitState, RateLimiter, SystemClock};

/// Classifies text through a [`Classifier`], enforcing a local rate window
/// and retrying transient failures.
///
/// # Example
///
/// ```no_run
/// use sentiscope::{MockClassifier, SentimentClient};
///
/// # async fn example() -> sentiscope::Result<()> {
/// let client = SentimentClient::new(MockClassifier::new());
/// let result = client.analyze_sentiment("Great product!").await?;
/// println!("{} ({:.2})", result.label, result.confidence);
/// # Ok(())
/// # }
/// ```
pub struct SentimentClient {
    classifier: Arc<dyn Classifier>,
    config: ClientConfig,
    limiter: Mutex<RateLimiter>,
}

impl SentimentClient {
    /// Create a client with default configuration.
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self::with_config(Arc::new(classifier), ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(classifier: Arc<dyn Classifier>, config: ClientConfig) -> Self {
        Self::with_clock(classifier, config, Arc::new(SystemClock))
    }

    /// Create a client whose rate window follows the given clock.
    pub fn with_clock(
        classifier: Arc<dyn Classifier>,
        config: ClientConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let limiter = RateLimiter::with_clock(config.rate_limit, config.rate_window, clock);
        Self {
            classifier,
            config,
            limiter: Mutex::new(limiter),
        }
    }

    /// Get the configuration for this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Name of the underlying classifier.
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Snapshot of the rate window. Has no side effects.
    pub fn rate_limit(&self) -> RateLimitState {
        self.limiter().snapshot()
    }

    /// Classify one text.
    ///
    /// The rate window is checked once, before any attempt; an exhausted
    /// window fails immediately with [`SentimentError::RateLimited`]. Failed
    /// attempts are retried per the configured [`RetryPolicy`], and the last
    /// error is returned once retries run out.
    ///
    /// [`RetryPolicy`]: super::RetryPolicy
    pub async fn analyze_sentiment(&self, text: &str) -> Result<SentimentResult> {
        if !self.limiter().try_acquire() {
            warn!(classifier = self.classifier.name(), "rate limit exceeded");
            return Err(SentimentError::RateLimited);
        }

        let model = self.config.model.as_str();
        self.config
            .retry
            .run(|attempt| async move {
                debug!(attempt, model, chars = text.len(), "classifying text");
                let candidates = self.classifier.classify(model, text).await?;
                let top = candidates
                    .first()
                    .ok_or_else(|| SentimentError::api("Classifier returned no labels"))?;
                Ok(SentimentResult::from_candidate(top, text))
            })
            .await
    }

    /// Classify many texts, failing the whole batch if any item fails.
    ///
    /// Texts are processed in chunks of `batch_size`; calls inside a chunk run
    /// concurrently and chunks are separated by `batch_pause`. Results keep
    /// input order. Calls already issued in a failing chunk still run to
    /// completion; the error reported is that of the first failing item.
    pub async fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<SentimentResult>> {
        self.process_chunks(texts, true)
            .await
            .into_iter()
            .collect()
    }

    /// Classify many texts, returning one outcome per input.
    ///
    /// Same chunking and pacing as [`analyze_batch`](Self::analyze_batch),
    /// but a failing item does not stop the rest.
    pub async fn analyze_batch_settled<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Vec<Result<SentimentResult>> {
        self.process_chunks(texts, false).await
    }

    async fn process_chunks<S: AsRef<str>>(
        &self,
        texts: &[S],
        stop_on_error: bool,
    ) -> Vec<Result<SentimentResult>> {
        let chunk_size = self.config.batch_size.max(1);
        let chunk_count = texts.len().div_ceil(chunk_size);
        let mut outcomes = Vec::with_capacity(texts.len());

        for (index, chunk) in texts.chunks(chunk_size).enumerate() {
            info!(
                chunk = index + 1,
                chunks = chunk_count,
                size = chunk.len(),
                "analyzing batch chunk"
            );

            let results =
                join_all(chunk.iter().map(|text| self.analyze_sentiment(text.as_ref()))).await;
            let failed = results.iter().any(|r| r.is_err());
            outcomes.extend(results);

            if failed && stop_on_error {
                warn!(chunk = index + 1, "batch aborted after failed item");
                break;
            }

            if index + 1 < chunk_count {
                tokio::time::sleep(self.config.batch_pause).await;
            }
        }

        outcomes
    }

    fn limiter(&self) -> MutexGuard<'_, RateLimiter> {
        self.limiter.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//! Mock classifier for tests and offline runs.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, SentimentError};
use crate::sentiment::LabelScore;

use super::classifier::Classifier;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "love", "amazing", "happy", "fantastic", "awesome", "nice",
    "wonderful", "best",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "horrible", "worst", "poor", "sad", "broken", "angry",
    "disappointing",
];

/// Mock classifier that labels text by keyword counts.
///
/// Failures can be scripted: the first `n` calls, or every call for a given
/// text. Call counts and peak concurrency are recorded for assertions.
pub struct MockClassifier {
    fail_first: usize,
    fail_texts: HashSet<String>,
    latency: Option<Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockClassifier {
    /// Create a new mock classifier that always succeeds.
    pub fn new() -> Self {
        Self {
            fail_first: 0,
            fail_texts: HashSet::new(),
            latency: None,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Fail the first `n` calls with an API error.
    pub fn failing_first(mut self, n: usize) -> Self {
        self.fail_first = n;
        self
    }

    /// Always fail calls for this exact text.
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.fail_texts.insert(text.into());
        self
    }

    /// Sleep this long inside every call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of calls observed running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Label text by counting known positive and negative words.
    fn label(text: &str) -> LabelScore {
        let mut positive = 0usize;
        let mut negative = 0usize;
        for word in text.split_whitespace() {
            let word = word
                .trim_matches(|c: char| !c.is_ascii_alphanumeric())
                .to_ascii_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                negative += 1;
            }
        }

        let margin = positive.abs_diff(negative) as f64;
        let score = (0.6 + 0.1 * margin).min(0.99);
        if positive > negative {
            LabelScore::new("POSITIVE", score)
        } else if negative > positive {
            LabelScore::new("NEGATIVE", score)
        } else {
            LabelScore::new("NEUTRAL", 0.5)
        }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, _model: &str, text: &str) -> Result<Vec<LabelScore>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if call < self.fail_first {
            return Err(SentimentError::Api {
                status: Some(503),
                message: format!("mock failure on call {}", call + 1),
            });
        }
        if self.fail_texts.contains(text) {
            return Err(SentimentError::api(format!("mock failure for '{}'", text)));
        }

        Ok(vec![Self::label(text)])
    }

    fn name(&self) -> &str {
        "mock"
    }
}

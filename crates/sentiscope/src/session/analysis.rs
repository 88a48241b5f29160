//! A recorded analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sentiment::SentimentResult;

/// Where the analyzed text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Csv,
    Manual,
}

/// One classified text, as kept in the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Unique identifier.
    pub id: String,
    /// Sanitized input text.
    pub text: String,
    /// When the result was recorded.
    pub timestamp: DateTime<Utc>,
    /// Classification outcome.
    pub result: SentimentResult,
    /// Input channel.
    pub source: AnalysisSource,
}

impl Analysis {
    /// Record a result now.
    pub fn new(text: impl Into<String>, result: SentimentResult, source: AnalysisSource) -> Self {
        Self::at(text, result, source, Utc::now())
    }

    /// Record a result with an explicit timestamp.
    pub fn at(
        text: impl Into<String>,
        result: SentimentResult,
        source: AnalysisSource,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            timestamp,
            result,
            source,
        }
    }

    /// Record a manually entered text.
    pub fn manual(text: impl Into<String>, result: SentimentResult) -> Self {
        Self::new(text, result, AnalysisSource::Manual)
    }

    /// Record a text taken from an uploaded CSV.
    pub fn from_csv(text: impl Into<String>, result: SentimentResult) -> Self {
        Self::new(text, result, AnalysisSource::Csv)
    }

    /// Pair texts with their batch results, all stamped with the same time.
    pub fn from_batch(texts: &[String], results: Vec<SentimentResult>) -> Vec<Self> {
        let now = Utc::now();
        texts
            .iter()
            .zip(results)
            .map(|(text, result)| Self::at(text.clone(), result, AnalysisSource::Csv, now))
            .collect()
    }
}

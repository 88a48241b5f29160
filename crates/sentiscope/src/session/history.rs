//! Session history.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentLabel;

use super::analysis::{Analysis, AnalysisSource};
use super::trend::{daily_trend, TrendPoint};

/// Totals across the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub from_csv: usize,
    pub manual: usize,
    /// Mean confidence (0.0 when empty).
    pub mean_confidence: f64,
}

/// In-memory list of analyses, newest first.
#[derive(Debug, Clone, Default)]
pub struct Session {
    analyses: Vec<Analysis>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single analysis at the front.
    pub fn record_single(&mut self, analysis: Analysis) {
        self.analyses.insert(0, analysis);
    }

    /// Add a batch at the front, keeping the batch's own order.
    pub fn record_batch(&mut self, batch: Vec<Analysis>) {
        self.analyses.splice(0..0, batch);
    }

    /// All analyses, newest first.
    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.analyses.clear();
    }

    /// Trend for the seven days ending today (UTC).
    pub fn trend(&self) -> Vec<TrendPoint> {
        self.trend_until(Utc::now().date_naive())
    }

    /// Trend for the seven days ending at `today`.
    pub fn trend_until(&self, today: NaiveDate) -> Vec<TrendPoint> {
        daily_trend(&self.analyses, today)
    }

    /// Totals by label and source.
    pub fn summary(&self) -> SessionSummary {
        let mut summary = SessionSummary {
            total: self.analyses.len(),
            ..SessionSummary::default()
        };
        let mut confidence_sum = 0.0;

        for analysis in &self.analyses {
            match analysis.result.label {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Negative => summary.negative += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
            }
            match analysis.source {
                AnalysisSource::Csv => summary.from_csv += 1,
                AnalysisSource::Manual => summary.manual += 1,
            }
            confidence_sum += analysis.result.confidence;
        }

        if summary.total > 0 {
            summary.mean_confidence = confidence_sum / summary.total as f64;
        }
        summary
    }
}

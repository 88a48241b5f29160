//! Sentiment labels and results.

use serde::{Deserialize, Serialize};

/// Polarity assigned to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Map a raw classifier label onto a polarity.
    ///
    /// Matching is case-insensitive; anything that is not recognizably
    /// positive or negative is treated as neutral.
    pub fn from_raw(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" | "POS" => SentimentLabel::Positive,
            "NEGATIVE" | "NEG" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    /// Get the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate returned by the remote classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Classification outcome for a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Signed polarity: negative, zero for neutral, or positive.
    pub score: f64,

    /// Polarity label; its sign always agrees with `score`.
    pub label: SentimentLabel,

    /// Classifier's certainty (0.0-1.0).
    pub confidence: f64,

    /// Whitespace-split words of the analyzed text.
    pub tokens: Vec<String>,
}

impl SentimentResult {
    /// Build a result from the top classifier candidate for `text`.
    ///
    /// POSITIVE keeps the score, NEGATIVE negates it, NEUTRAL forces zero.
    pub fn from_candidate(candidate: &LabelScore, text: &str) -> Self {
        let label = SentimentLabel::from_raw(&candidate.label);
        let confidence = if candidate.score.is_finite() {
            candidate.score.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let score = match label {
            SentimentLabel::Positive => confidence,
            SentimentLabel::Negative => -confidence,
            SentimentLabel::Neutral => 0.0,
        };

        Self {
            score,
            label,
            confidence,
            tokens: tokenize(text),
        }
    }
}

/// Split text into whitespace-separated words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_keeps_score() {
        let result = SentimentResult::from_candidate(&LabelScore::new("POSITIVE", 0.95), "Great product!");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.score, 0.95);
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.tokens, vec!["Great", "product!"]);
    }

    #[test]
    fn test_negative_negates_score() {
        let result = SentimentResult::from_candidate(&LabelScore::new("negative", 0.8), "bad");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.score, -0.8);
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_other_labels_are_neutral_with_zero_score() {
        for raw in ["NEUTRAL", "joy", "LABEL_1"] {
            let result = SentimentResult::from_candidate(&LabelScore::new(raw, 0.7), "meh");
            assert_eq!(result.label, SentimentLabel::Neutral);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.confidence, 0.7);
        }
    }

    #[test]
    fn test_confidence_is_clamped() {
        let result = SentimentResult::from_candidate(&LabelScore::new("POSITIVE", 1.3), "x");
        assert_eq!(result.confidence, 1.0);
        let result = SentimentResult::from_candidate(&LabelScore::new("POSITIVE", f64::NAN), "x");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_label_serializes_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"NEGATIVE\"");
    }
}

// Polarity source trait and sentiment labels.
//
// Polarity is a single number in [-1.0, 1.0]: negative is an unfavorable
// tone, positive a favorable one. Labels are derived with strict thresholds
// on both sides, so exactly 0.2 and exactly -0.2 are Neutral.

use anyhow::Result;
use serde::Serialize;

/// Polarity above this is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;

/// Polarity below this is Negative. The suggestion rule's tone check uses
/// the same value.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Trait for turning free text into a polarity score.
///
/// Implementations receive the subject exactly as written (case and
/// punctuation intact) and must return a value in [-1.0, 1.0]. Errors are
/// propagated to the caller untouched; the scorer never invents a fallback.
pub trait PolaritySource: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64>;
}

/// Three-way sentiment classification of a polarity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Classify a polarity value.
    pub fn from_polarity(polarity: f64) -> Self {
        match polarity {
            p if p > POSITIVE_THRESHOLD => SentimentLabel::Positive,
            p if p < NEGATIVE_THRESHOLD => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A polarity source that always answers with the same value.
///
/// Handy wherever the real engine would make a result hard to predict.
pub struct FixedPolarity(pub f64);

impl PolaritySource for FixedPolarity {
    fn polarity(&self, _text: &str) -> Result<f64> {
        Ok(self.0)
    }
}

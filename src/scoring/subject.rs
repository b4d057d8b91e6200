// Subject scorer: one subject line in, one SubjectReport out.
//
// The scorer owns both keyword lists and the polarity source. It holds no
// mutable state, so one instance can score any number of subjects (from any
// number of threads) and the same subject always yields the same report.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::keywords::{normalize, KeywordList};
use super::suggestion::Suggestion;
use crate::sentiment::traits::{PolaritySource, SentimentLabel};

/// Points added per matched spam trigger.
pub const SPAM_POINTS_PER_TRIGGER: u32 = 10;

/// Upper bound for both scores.
pub const MAX_SCORE: u32 = 100;

/// The scored result for a single subject line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectReport {
    /// The subject exactly as supplied
    pub subject: String,
    /// Share of the relevance list found in the subject, 0-100, two decimals
    pub relevance_score: f64,
    /// 10 points per matched spam trigger, capped at 100
    pub spam_score: u32,
    pub sentiment: SentimentLabel,
    /// Raw value the sentiment label was derived from
    pub polarity: f64,
    /// Relevance keywords found, in list order
    pub matched_keywords: Vec<String>,
    /// Spam triggers found, in list order
    pub spam_words: Vec<String>,
    pub suggestion: Suggestion,
}

pub struct SubjectScorer {
    relevance: KeywordList,
    spam: KeywordList,
    polarity: Box<dyn PolaritySource>,
}

impl SubjectScorer {
    /// Create a scorer. Fails if the relevance list is empty, since the
    /// relevance score is a share of that list.
    ///
    /// An empty spam list is fine: every subject then scores 0 spam.
    pub fn new(
        relevance: KeywordList,
        spam: KeywordList,
        polarity: Box<dyn PolaritySource>,
    ) -> Result<Self> {
        anyhow::ensure!(
            !relevance.is_empty(),
            "Relevance keyword list is empty; at least one keyword is needed to score relevance"
        );
        Ok(Self {
            relevance,
            spam,
            polarity,
        })
    }

    /// Scorer with the default payday and spam-trigger lists.
    pub fn with_default_lists(polarity: Box<dyn PolaritySource>) -> Result<Self> {
        Self::new(KeywordList::payday(), KeywordList::spam_triggers(), polarity)
    }

    pub fn relevance_keywords(&self) -> &KeywordList {
        &self.relevance
    }

    pub fn spam_triggers(&self) -> &KeywordList {
        &self.spam
    }

    /// Score one subject line.
    ///
    /// Only a polarity source failure (an error, NaN, or a value outside
    /// [-1, 1]) makes this fail. Any string, including the empty one, is a
    /// valid subject.
    pub fn score(&self, subject: &str) -> Result<SubjectReport> {
        let lowered = normalize(subject);

        let matched_keywords = self.relevance.matches(&lowered);
        let relevance_score = relevance_score(matched_keywords.len(), self.relevance.len());

        let spam_words = self.spam.matches(&lowered);
        let spam_score = spam_score(spam_words.len());

        // Sentiment runs on the untouched subject; engines may care about
        // case and punctuation.
        let polarity = self
            .polarity
            .polarity(subject)
            .with_context(|| format!("Polarity source failed for subject {subject:?}"))?;
        if !(-1.0..=1.0).contains(&polarity) {
            anyhow::bail!(
                "Polarity source returned {polarity} for subject {subject:?}; expected a value in [-1, 1]"
            );
        }

        let sentiment = SentimentLabel::from_polarity(polarity);
        let suggestion = Suggestion::select(relevance_score, spam_score, polarity);

        debug!(
            subject,
            relevance_score,
            spam_score,
            polarity,
            sentiment = sentiment.as_str(),
            "Scored subject"
        );

        Ok(SubjectReport {
            subject: subject.to_string(),
            relevance_score,
            spam_score,
            sentiment,
            polarity,
            matched_keywords,
            spam_words,
            suggestion,
        })
    }
}

/// `round(100 * matched / total, 2)`, clamped to [0, 100].
///
/// Exact halves round to even (1 of 32 keywords is 3.12, not 3.13).
///
/// `total` must be non-zero; SubjectScorer::new guarantees that.
pub fn relevance_score(matched: usize, total: usize) -> f64 {
    let raw = 100.0 * matched as f64 / total as f64;
    ((raw * 100.0).round_ties_even() / 100.0).clamp(0.0, MAX_SCORE as f64)
}

/// `min(100, 10 * matched)`.
pub fn spam_score(matched: usize) -> u32 {
    let matched = u32::try_from(matched).unwrap_or(u32::MAX);
    matched
        .saturating_mul(SPAM_POINTS_PER_TRIGGER)
        .min(MAX_SCORE)
}

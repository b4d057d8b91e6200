// Suggestion rule: a fixed priority list, first match wins.
//
//   1. relevance below 20%      -> add domain keywords
//   2. spam score above 50      -> tone down urgency and promises
//   3. polarity below -0.2      -> make it more reassuring
//   4. otherwise                -> looks balanced
//
// Only the negative tone branch is checked, and only after relevance and
// spam. A very negative subject with too few keywords still gets advice
// about keywords.

use serde::{Serialize, Serializer};

use crate::sentiment::traits::NEGATIVE_THRESHOLD;

/// Relevance scores below this trigger the keyword suggestion.
pub const MIN_RELEVANCE: f64 = 20.0;

/// Spam scores above this trigger the urgency suggestion.
pub const MAX_SPAM: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    AddKeywords,
    ReduceUrgency,
    SoftenTone,
    Balanced,
}

impl Suggestion {
    /// Pick the suggestion for a scored subject.
    pub fn select(relevance_score: f64, spam_score: u32, polarity: f64) -> Self {
        if relevance_score < MIN_RELEVANCE {
            Suggestion::AddKeywords
        } else if spam_score > MAX_SPAM {
            Suggestion::ReduceUrgency
        } else if polarity < NEGATIVE_THRESHOLD {
            Suggestion::SoftenTone
        } else {
            Suggestion::Balanced
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::AddKeywords => {
                "Add payday loan-related words like 'cash', 'loan', or 'apply today'."
            }
            Suggestion::ReduceUrgency => "Too spammy: avoid excessive urgency or promises.",
            Suggestion::SoftenTone => "Tone seems negative: make it more reassuring or helpful.",
            Suggestion::Balanced => "Looks balanced: could perform well.",
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

// Reports carry the human-readable text, not the variant name.
impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_relevance_wins_over_everything() {
        assert_eq!(Suggestion::select(5.0, 100, -1.0), Suggestion::AddKeywords);
    }

    #[test]
    fn test_spam_wins_over_tone() {
        assert_eq!(Suggestion::select(40.0, 60, -0.9), Suggestion::ReduceUrgency);
    }

    #[test]
    fn test_negative_tone() {
        assert_eq!(Suggestion::select(40.0, 20, -0.5), Suggestion::SoftenTone);
    }

    #[test]
    fn test_balanced() {
        assert_eq!(Suggestion::select(40.0, 20, 0.1), Suggestion::Balanced);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly 20% relevance is enough, exactly 50 spam is tolerated,
        // exactly -0.2 polarity is not negative.
        assert_eq!(Suggestion::select(20.0, 50, -0.2), Suggestion::Balanced);
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&Suggestion::Balanced).unwrap();
        assert_eq!(json, "\"Looks balanced: could perform well.\"");
    }
}

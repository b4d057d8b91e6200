// Keyword lists: the static vocabulary the scorer matches subjects against.
//
// Lists are plain values handed to the scorer at construction time, so tests
// (and callers with a different product) can swap in their own vocabulary.
// Matching is substring containment on the lowercased subject, not
// tokenized: "cash" matches inside "cashier", "instant" inside "instantly".

use anyhow::Result;
use serde::Serialize;

/// Topical vocabulary for payday-loan marketing.
pub const PAYDAY_KEYWORDS: &[&str] = &[
    "loan",
    "payday",
    "cash",
    "borrow",
    "advance",
    "money",
    "urgent",
    "today",
    "fast",
    "quick",
    "instant",
    "approved",
    "credit",
    "bad credit",
    "funds",
    "deposit",
    "apply",
    "online",
    "same day",
    "get cash",
    "short term",
];

/// Marketing red flags, including symbolic tokens.
pub const SPAM_TRIGGER_WORDS: &[&str] = &[
    "free",
    "guaranteed",
    "click now",
    "winner",
    "!!!",
    "urgent",
    "act now",
    "limited",
    "offer",
    "100%",
    "no credit check",
    "instant approval",
];

/// An ordered, immutable list of lowercase keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordList {
    terms: Vec<String>,
}

impl KeywordList {
    /// Build a list from arbitrary terms. Terms are lowercased; order and
    /// duplicates are preserved.
    ///
    /// Blank terms are refused: an empty substring is contained in every
    /// subject and would silently inflate every score.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        for (position, term) in terms.into_iter().enumerate() {
            let term = term.as_ref();
            if term.trim().is_empty() {
                anyhow::bail!("Keyword #{} is blank; every keyword needs some text", position + 1);
            }
            list.push(term.to_lowercase());
        }
        Ok(Self { terms: list })
    }

    /// The default payday-loan relevance vocabulary.
    pub fn payday() -> Self {
        Self::from_static(PAYDAY_KEYWORDS)
    }

    /// The default spam-trigger vocabulary.
    pub fn spam_triggers() -> Self {
        Self::from_static(SPAM_TRIGGER_WORDS)
    }

    fn from_static(terms: &[&str]) -> Self {
        Self {
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Return every keyword contained in `lowered`, in list order.
    ///
    /// `lowered` must already be lowercased (see [`normalize`]). A keyword
    /// appearing several times in the subject is reported once; a keyword
    /// listed twice in the list is reported twice.
    pub fn matches(&self, lowered: &str) -> Vec<String> {
        self.terms
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .cloned()
            .collect()
    }
}

/// Lowercase a subject for matching. The original text is kept separately.
pub fn normalize(subject: &str) -> String {
    subject.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_sizes() {
        assert_eq!(KeywordList::payday().len(), 21);
        assert_eq!(KeywordList::spam_triggers().len(), 12);
    }

    #[test]
    fn test_matches_follow_list_order_not_text_order() {
        let list = KeywordList::new(["loan", "cash", "apply"]).unwrap();
        let hits = list.matches("apply for cash or a loan");
        assert_eq!(hits, vec!["loan", "cash", "apply"]);
    }

    #[test]
    fn test_repeated_occurrence_counts_once() {
        let list = KeywordList::new(["cash"]).unwrap();
        assert_eq!(list.matches("cash cash cash"), vec!["cash"]);
    }

    #[test]
    fn test_substring_inside_longer_word() {
        let list = KeywordList::new(["cash", "instant"]).unwrap();
        assert_eq!(list.matches("ask the cashier instantly"), vec!["cash", "instant"]);
    }

    #[test]
    fn test_new_lowercases_terms() {
        let list = KeywordList::new(["Bad Credit"]).unwrap();
        assert_eq!(list.terms(), &["bad credit".to_string()]);
    }

    #[test]
    fn test_blank_term_rejected() {
        let err = KeywordList::new(["loan", "  "]).unwrap_err();
        assert!(err.to_string().contains("#2"), "got: {err}");
    }

    #[test]
    fn test_normalize_handles_unicode() {
        assert_eq!(normalize("ÉCLAIR Cash"), "éclair cash");
    }
}

// Lexicon-based polarity engine.
//
// Averages hand-assigned word polarities across a subject line, with two
// modifiers borrowed from pattern-style analyzers:
//   - an intensifier ("very good") multiplies the next sentiment word
//   - a negation ("not good") flips the next sentiment word by -0.5, as long
//     as it appears within NEGATION_SCOPE tokens
//
// Deterministic and local: no model files, no network. Each contribution is
// clamped to [-1, 1] before averaging, so the result always is too.

use std::collections::HashMap;

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::traits::PolaritySource;

/// Factor applied to a negated sentiment word.
const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens a negation reaches forward.
const NEGATION_SCOPE: usize = 3;

const LEXICON: &[(&str, f64)] = &[
    // Favorable
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("congratulations", 0.6),
    ("easy", 0.43),
    ("excellent", 1.0),
    ("fast", 0.2),
    ("free", 0.4),
    ("friendly", 0.375),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("perfect", 1.0),
    ("quick", 0.33),
    ("reliable", 0.5),
    ("safe", 0.5),
    ("secure", 0.4),
    ("simple", 0.1),
    ("smart", 0.21),
    ("trusted", 0.4),
    ("welcome", 0.8),
    ("wonderful", 1.0),
    // Unfavorable
    ("afraid", -0.6),
    ("angry", -0.5),
    ("awful", -1.0),
    ("bad", -0.7),
    ("broke", -0.4),
    ("costly", -0.6),
    ("denied", -0.5),
    ("desperate", -0.6),
    ("difficult", -0.5),
    ("expensive", -0.5),
    ("failed", -0.5),
    ("hard", -0.29),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("late", -0.3),
    ("overdue", -0.4),
    ("poor", -0.4),
    ("rejected", -0.5),
    ("sad", -0.5),
    ("scary", -0.5),
    ("stressed", -0.5),
    ("stuck", -0.3),
    ("struggling", -0.4),
    ("terrible", -1.0),
    ("worried", -0.5),
    ("worst", -1.0),
    ("wrong", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("really", 1.3),
    ("so", 1.2),
    ("super", 1.3),
    ("totally", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "aren't", "can't", "don't", "isn't", "never", "no", "not", "won't",
];

/// Built-in polarity engine backed by a static word lexicon.
pub struct LexiconPolarity {
    word_pattern: Regex,
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconPolarity {
    pub fn new() -> Result<Self> {
        let word_pattern =
            Regex::new(r"[a-z]+(?:'[a-z]+)?").context("Failed to compile word tokenizer")?;
        Ok(Self {
            word_pattern,
            lexicon: LEXICON.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        })
    }

    /// Number of sentiment-bearing words the engine knows.
    pub fn vocabulary_size(&self) -> usize {
        self.lexicon.len()
    }

    /// Compute the polarity of `text`. Never fails; text without any known
    /// sentiment word scores 0.0.
    pub fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();

        let mut total = 0.0;
        let mut scored = 0usize;
        let mut multiplier = 1.0;
        let mut negation_window = 0usize;

        for token in self.word_pattern.find_iter(&lowered).map(|m| m.as_str()) {
            if NEGATIONS.contains(&token) {
                negation_window = NEGATION_SCOPE;
                multiplier = 1.0;
                continue;
            }
            if let Some(&boost) = self.intensifiers.get(token) {
                multiplier *= boost;
                continue;
            }

            match self.lexicon.get(token) {
                Some(&value) => {
                    let mut contribution = value * multiplier;
                    if negation_window > 0 {
                        contribution *= NEGATION_FACTOR;
                    }
                    total += contribution.clamp(-1.0, 1.0);
                    scored += 1;
                    negation_window = 0;
                }
                None => negation_window = negation_window.saturating_sub(1),
            }
            multiplier = 1.0;
        }

        if scored == 0 {
            0.0
        } else {
            (total / scored as f64).clamp(-1.0, 1.0)
        }
    }
}

impl PolaritySource for LexiconPolarity {
    fn polarity(&self, text: &str) -> Result<f64> {
        Ok(self.score(text))
    }
}

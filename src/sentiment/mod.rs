// Sentiment: polarity sources and the three-way label derived from them.
//
// The PolaritySource trait is the seam. LexiconPolarity is the built-in,
// dependency-free engine; callers can plug in any other engine without
// touching the scorer.

pub mod lexicon;
pub mod traits;

// subjectline: relevance, spam-risk and tone scoring for payday-loan email
// subject lines.
//
// This is the library root. `scoring` holds the core (keyword matching, the
// subject scorer, the suggestion rule); `sentiment` holds the polarity
// source seam; `output` renders reports.

pub mod config;
pub mod output;
pub mod samples;
pub mod scoring;
pub mod sentiment;

// Scoring: keyword matching, the per-subject scorer, the suggestion rule,
// and the batch driver that runs the scorer over a list of subjects.

pub mod batch;
pub mod keywords;
pub mod subject;
pub mod suggestion;

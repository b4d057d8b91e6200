// Batch driver: score a list of subjects, keeping input order.
//
// Scoring is pure, so there is nothing to retry. The first polarity failure
// stops the batch and is returned with the subject's position attached;
// deciding whether to skip that subject is up to the caller.

use anyhow::{Context, Result};
use tracing::info;

use super::subject::{SubjectReport, SubjectScorer};

/// Score every subject in order.
pub fn score_batch<S: AsRef<str>>(
    scorer: &SubjectScorer,
    subjects: &[S],
) -> Result<Vec<SubjectReport>> {
    let mut reports = Vec::with_capacity(subjects.len());
    for (i, subject) in subjects.iter().enumerate() {
        let report = scorer
            .score(subject.as_ref())
            .with_context(|| format!("Failed to score subject #{}", i + 1))?;
        reports.push(report);
    }

    info!(
        subjects = reports.len(),
        spammy = reports
            .iter()
            .filter(|r| r.spam_score > super::suggestion::MAX_SPAM)
            .count(),
        "Scored subject batch"
    );

    Ok(reports)
}

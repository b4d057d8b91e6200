// JSON report: the full set of SubjectReports plus a generation timestamp.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::subject::SubjectReport;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub reports: &'a [SubjectReport],
}

impl<'a> JsonReport<'a> {
    pub fn new(reports: &'a [SubjectReport]) -> Self {
        Self {
            generated_at: Utc::now(),
            count: reports.len(),
            reports,
        }
    }
}

/// Render reports as a pretty-printed JSON document.
pub fn render(reports: &[SubjectReport]) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(reports)).context("Failed to serialize report")
}

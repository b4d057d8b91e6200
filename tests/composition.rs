// Composition tests: the lexicon engine, scorer, batch driver and renderers
// chained together the way the binary runs them, with no I/O.

use subjectline::output::json;
use subjectline::output::{join_or_none, truncate_chars};
use subjectline::samples::SAMPLE_SUBJECTS;
use subjectline::scoring::batch::score_batch;
use subjectline::scoring::subject::{SubjectReport, SubjectScorer};
use subjectline::scoring::suggestion::Suggestion;
use subjectline::sentiment::lexicon::LexiconPolarity;
use subjectline::sentiment::traits::SentimentLabel;

fn default_scorer() -> SubjectScorer {
    SubjectScorer::with_default_lists(Box::new(LexiconPolarity::new().unwrap())).unwrap()
}

fn score_samples() -> Vec<SubjectReport> {
    score_batch(&default_scorer(), SAMPLE_SUBJECTS).unwrap()
}

// ============================================================
// Samples through the lexicon engine
// ============================================================

#[test]
fn samples_produce_one_report_each_in_order() {
    let reports = score_samples();
    assert_eq!(reports.len(), SAMPLE_SUBJECTS.len());
    for (report, subject) in reports.iter().zip(SAMPLE_SUBJECTS) {
        assert_eq!(report.subject, *subject);
    }
}

#[test]
fn winner_sample_reads_positive_and_spammy() {
    let reports = score_samples();
    let winner = &reports[2];
    // congratulations 0.6, free 0.4 -> mean 0.5
    assert!((winner.polarity - 0.5).abs() < 1e-9, "got {}", winner.polarity);
    assert_eq!(winner.sentiment, SentimentLabel::Positive);
    assert_eq!(winner.spam_score, 30);
}

#[test]
fn costly_repair_sample_reads_negative_but_asks_for_keywords() {
    let reports = score_samples();
    let repair = &reports[3];
    assert_eq!(repair.sentiment, SentimentLabel::Negative);
    assert_eq!(repair.relevance_score, 0.0);
    assert_eq!(repair.suggestion, Suggestion::AddKeywords);
}

#[test]
fn today_sample_matches_one_keyword() {
    let reports = score_samples();
    let savings = &reports[5];
    assert_eq!(savings.matched_keywords, vec!["today"]);
    assert_eq!(savings.relevance_score, 4.76);
    assert_eq!(savings.sentiment, SentimentLabel::Neutral);
}

#[test]
fn relevant_clean_subject_is_balanced() {
    let report = default_scorer()
        .score("Apply online today for a fast cash loan")
        .unwrap();
    assert_eq!(report.suggestion, Suggestion::Balanced);
}

#[test]
fn relevant_but_gloomy_subject_gets_tone_advice() {
    let report = default_scorer()
        .score("Stressed and broke? Apply online today for a cash loan")
        .unwrap();
    assert!(report.relevance_score >= 20.0, "relevance {}", report.relevance_score);
    assert_eq!(report.sentiment, SentimentLabel::Negative);
    assert_eq!(report.suggestion, Suggestion::SoftenTone);
}

#[test]
fn scorer_is_shareable_across_threads() {
    let scorer = default_scorer();
    let expected = score_batch(&scorer, SAMPLE_SUBJECTS).unwrap();

    let scorer = &scorer;
    std::thread::scope(|s| {
        let handles: Vec<_> = SAMPLE_SUBJECTS
            .iter()
            .map(|subject| s.spawn(move || scorer.score(subject).unwrap()))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}

// ============================================================
// Rendering
// ============================================================

#[test]
fn json_report_round_trips_through_serde() {
    let reports = score_samples();
    let rendered = json::render(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["count"], 6);
    assert!(value["generated_at"].is_string());

    let winner = &value["reports"][2];
    assert_eq!(winner["spam_score"], 30);
    assert_eq!(winner["sentiment"], "Positive");
    assert_eq!(winner["spam_words"], serde_json::json!(["free", "winner", "!!!"]));
    assert_eq!(
        winner["suggestion"],
        "Add payday loan-related words like 'cash', 'loan', or 'apply today'."
    );
}

#[test]
fn join_or_none_for_empty_matches() {
    assert_eq!(join_or_none(&[]), "None");
    assert_eq!(
        join_or_none(&["free".to_string(), "winner".to_string()]),
        "free, winner"
    );
}

#[test]
fn truncate_chars_respects_utf8() {
    assert_eq!(truncate_chars("Préstamo 💸 rápido", 10), "Préstamo 💸...");
    assert_eq!(truncate_chars("short", 10), "short");
}

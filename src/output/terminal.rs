// Colored terminal output for subject reports.
//
// One table row per subject with the scores, then the matched words and the
// suggestion indented underneath, then a short summary.

use colored::Colorize;

use super::{join_or_none, truncate_chars};
use crate::scoring::keywords::KeywordList;
use crate::scoring::subject::SubjectReport;
use crate::scoring::suggestion::{Suggestion, MAX_SPAM};
use crate::sentiment::traits::SentimentLabel;

/// Display scored subjects as a table.
pub fn display_reports(reports: &[SubjectReport], subject_width: usize) {
    if reports.is_empty() {
        println!("No subjects to score.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Subject Line Report ({} subjects) ===", reports.len()).bold()
    );
    println!();

    // Width of a truncated subject includes the trailing "..."
    let width = subject_width + 3;
    println!(
        "  {:>3}  {:<width$}  {:>9}  {:>6}  {:<9}",
        "#".dimmed(),
        "Subject".dimmed(),
        "Relevance".dimmed(),
        "Spam".dimmed(),
        "Sentiment".dimmed(),
    );
    println!("  {}", "-".repeat(width + 36).dimmed());

    for (i, report) in reports.iter().enumerate() {
        println!(
            "  {:>3}. {:<width$}  {:>8.2}%  {:>6}  {:<9}",
            i + 1,
            truncate_chars(&report.subject, subject_width),
            report.relevance_score,
            colorize_spam(report.spam_score),
            colorize_sentiment(report.sentiment),
        );
        println!(
            "       {} {}",
            "keywords:".dimmed(),
            join_or_none(&report.matched_keywords)
        );
        println!(
            "       {} {}",
            "spam words:".dimmed(),
            join_or_none(&report.spam_words)
        );
        println!("       {}", colorize_suggestion(report.suggestion));
    }

    println!();

    let count_of = |label: SentimentLabel| reports.iter().filter(|r| r.sentiment == label).count();
    println!(
        "  Sentiment: {} positive, {} neutral, {} negative",
        count_of(SentimentLabel::Positive),
        count_of(SentimentLabel::Neutral),
        count_of(SentimentLabel::Negative),
    );

    let spammy = reports.iter().filter(|r| r.spam_score > MAX_SPAM).count();
    if spammy > 0 {
        println!("  {} {} subjects look spammy", "!!".red().bold(), spammy);
    }
    let balanced = reports
        .iter()
        .filter(|r| r.suggestion == Suggestion::Balanced)
        .count();
    println!("  {} {} subjects look balanced", "ok".green(), balanced);
}

/// Display the keyword lists a scorer matches against.
pub fn display_keywords(relevance: &KeywordList, spam: &KeywordList) {
    println!(
        "\n{}",
        format!("=== Relevance keywords ({}) ===", relevance.len()).bold()
    );
    println!("  {}", relevance.terms().join(", "));
    println!(
        "\n{}",
        format!("=== Spam triggers ({}) ===", spam.len()).bold()
    );
    println!("  {}", spam.terms().join(", "));
}

fn colorize_sentiment(label: SentimentLabel) -> colored::ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green(),
        SentimentLabel::Neutral => label.as_str().normal(),
        SentimentLabel::Negative => label.as_str().red(),
    }
}

fn colorize_spam(score: u32) -> colored::ColoredString {
    let text = score.to_string();
    match score {
        s if s > MAX_SPAM => text.red().bold(),
        s if s > 0 => text.yellow(),
        _ => text.green(),
    }
}

fn colorize_suggestion(suggestion: Suggestion) -> colored::ColoredString {
    match suggestion {
        Suggestion::Balanced => suggestion.message().green(),
        Suggestion::AddKeywords => suggestion.message().yellow(),
        Suggestion::ReduceUrgency | Suggestion::SoftenTone => suggestion.message().bright_red(),
    }
}

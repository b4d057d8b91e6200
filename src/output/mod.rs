// Output formatting: terminal table and JSON report.

pub mod json;
pub mod terminal;

/// Shorten a subject for the table's subject column.
///
/// Counts characters, not bytes, so subjects with emoji or accented letters
/// are cut on a character boundary. Cut subjects end in "...".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Join matched words for display, or "None" when nothing matched.
pub fn join_or_none(words: &[String]) -> String {
    if words.is_empty() {
        "None".to_string()
    } else {
        words.join(", ")
    }
}

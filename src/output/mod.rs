// Output formatting for the CLI.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// when something was cut. Works on char boundaries, so a long URL full
/// of percent-escapes or unicode confusables never panics a byte slice.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

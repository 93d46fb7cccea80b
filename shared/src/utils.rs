/// Trimmed utterance, or `None` when the input is blank or whitespace-only.
pub fn normalize_utterance(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

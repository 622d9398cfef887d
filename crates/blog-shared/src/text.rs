/// Suffix appended to truncated text.
const ELLIPSIS: &str = "...";

/// Shorten `content` to at most `max_chars` characters, appending `...` when
/// anything was cut. Counts chars, not bytes.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

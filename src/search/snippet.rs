//! Result excerpts: a short window of article content centered on the first
//! query occurrence, for the result list under each title.

/// Excerpt length in characters
pub const EXCERPT_LENGTH: usize = 150;
/// Characters of lead-in kept before the match
const LEAD_CHARS: usize = 50;

/// Build an excerpt of `content` around the first case-insensitive occurrence
/// of `query`, with `...` marking clipped ends. Falls back to a plain prefix
/// when the query does not occur (e.g. the match was in the title or tags).
pub fn excerpt(content: &str, query: &str) -> String {
    let content_lower = content.to_lowercase();
    let query_lower = query.to_lowercase();

    match content_lower.find(&query_lower) {
        Some(byte_idx) => window_around(content, byte_idx),
        None => prefix(content),
    }
}

/// Extract a character window starting `LEAD_CHARS` before the match,
/// respecting UTF-8 character boundaries.
fn window_around(content: &str, match_byte_idx: usize) -> String {
    let char_indices: Vec<(usize, char)> = content.char_indices().collect();

    // Char position corresponding to the (lowercased) byte index.
    let match_char_idx = char_indices
        .iter()
        .position(|(byte_pos, _)| *byte_pos >= match_byte_idx)
        .unwrap_or(0);

    let start_char = match_char_idx.saturating_sub(LEAD_CHARS);
    let end_char = (start_char + EXCERPT_LENGTH).min(char_indices.len());

    let start_byte = char_indices.get(start_char).map(|(b, _)| *b).unwrap_or(0);
    let end_byte = char_indices
        .get(end_char)
        .map(|(b, _)| *b)
        .unwrap_or(content.len());

    let mut excerpt = content[start_byte..end_byte].to_string();
    if start_char > 0 {
        excerpt = format!("...{excerpt}");
    }
    if end_char < char_indices.len() {
        excerpt.push_str("...");
    }
    excerpt
}

fn prefix(content: &str) -> String {
    let char_count = content.chars().count();
    if char_count <= EXCERPT_LENGTH {
        return content.to_string();
    }
    let end_byte = content
        .char_indices()
        .nth(EXCERPT_LENGTH)
        .map(|(b, _)| b)
        .unwrap_or(content.len());
    format!("{}...", &content[..end_byte])
}

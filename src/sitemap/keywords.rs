// src/sitemap/keywords.rs
// =============================================================================
// This module turns the raw input file into an ordered list of keywords.
//
// For each line:
// 1. Skip it if it's empty
// 2. Percent-decode it (some keyword lists are stored URL-encoded)
// 3. Trim surrounding whitespace
// 4. Skip it if nothing is left
//
// Order and duplicates are preserved: the position of a keyword decides
// which chunk file it lands in.
// =============================================================================

use std::borrow::Cow;

/// Parses keyword lines out of the input file's text.
///
/// Trimming uses Rust's Unicode whitespace: it also strips characters like
/// U+00A0 (no-break space) and U+3000 (ideographic space), but keeps a
/// leading or trailing NUL byte.
///
/// Example:
///   "Toyota%20Camry\n\n  Honda  \n" -> ["Toyota Camry", "Honda"]
pub fn parse_keywords(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    text.lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let decoded = decode_line(line);
            let keyword = decoded.trim();
            if keyword.is_empty() {
                tracing::debug!(line, "skipping blank keyword line");
                None
            } else {
                Some(keyword.to_string())
            }
        })
        .collect()
}

/// Percent-decodes one line.
///
/// Never fails: a '%' that isn't followed by two hex digits is kept as-is,
/// and bytes that don't form valid UTF-8 become U+FFFD.
pub fn decode_line(line: &str) -> Cow<'_, str> {
    if !line.contains('%') {
        return Cow::Borrowed(line);
    }
    let bytes = urlencoding::decode_binary(line.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

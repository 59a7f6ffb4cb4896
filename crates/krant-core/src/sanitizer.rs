//! Sanitizer — normalises raw submission text before any pattern matching.
//!
//! Line endings are collapsed to LF, ASCII control characters other than tab
//! and LF are stripped, and the result is capped at [`MAX_TEKST`] code
//! points. The transformation is pure and infallible; invalid input bytes
//! never reach this stage because the reader decodes lossily.

/// Maximum length of sanitized submission text, in Unicode code points.
pub const MAX_TEKST: usize = 8_000;

/// Strip a raw submission down to predictable text.
///
/// CRLF and lone CR become LF, the control ranges `0x00..=0x08`, `0x0B`,
/// `0x0C` and `0x0E..=0x1F` are removed, and the result is truncated to
/// [`MAX_TEKST`] code points. Tab (`0x09`) and LF (`0x0A`) survive.
pub fn sanitize(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let stripped: String = unified.chars().filter(|c| !is_stripped_control(*c)).collect();
    truncate_chars(&stripped, MAX_TEKST).to_string()
}

/// Truncate `s` to at most `max` code points, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}')
}

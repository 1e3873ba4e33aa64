//! Small string helpers shared by the form models and the dispatcher.

/// Returns the longest prefix of `s` that is at most `max_bytes` long and
/// ends on a char boundary.
pub fn truncate_bytes(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Rewrites every line break (`\r\n`, lone `\r` or lone `\n`) as `\r\n`.
///
/// Browsers submit form values with CRLF line breaks, so normalizing on the
/// server keeps values stable across a round-trip through a hidden field.
pub fn normalize_newlines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str("\r\n");
            }
            '\n' => out.push_str("\r\n"),
            c => out.push(c),
        }
    }
    out
}

//! iCalendar text primitives: UTC stamps, text escaping, line folding.

use chrono::{DateTime, Utc};

/// Maximum octets per content line before folding.
pub const MAX_LINE_OCTETS: usize = 75;

/// Line terminator of every content line.
pub const CRLF: &str = "\r\n";

/// Formats an instant as `YYYYMMDDTHHMMSSZ`.
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escapes a TEXT property value.
///
/// Backslash, semicolon and comma gain a leading backslash; line breaks
/// (`\n`, `\r\n` or a lone `\r`) become the two characters `\n`.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            _ => out.push(c),
        }
    }
    out
}

/// Folds a content line so no physical line exceeds [`MAX_LINE_OCTETS`].
///
/// Continuation lines start with a single space, which counts towards the
/// limit. Splits never fall inside a UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;
    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > budget {
            out.push_str(CRLF);
            out.push(' ');
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(c);
        used += width;
    }
    out
}

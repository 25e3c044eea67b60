use serde_json::Value;

/// Default cap applied to free-form string fields.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 2048;

// Control characters removed outright. Tab, newline and carriage return are
// deliberately absent: they count as whitespace and get collapsed instead.
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0b}' | '\u{0c}' | '\u{0e}'..='\u{1f}' | '\u{7f}')
}

// Removed, not escaped: the stored value must be inert in any downstream
// context (SQL, HTML, log lines) without the reader knowing the escape rules.
fn is_stripped_markup(c: char) -> bool {
    matches!(c, '<' | '>' | '\'' | '"' | '&')
}

/// Normalizes an untrusted string field: trims, truncates to `max_len`
/// characters, strips control and markup characters, and collapses
/// whitespace runs to a single space. Non-string input degrades to `""`.
///
/// The output is a fixed point: sanitizing twice gives the same result.
pub fn sanitize_string(input: &Value, max_len: usize) -> String {
    match input.as_str() {
        Some(raw) => sanitize_str(raw, max_len),
        None => String::new(),
    }
}

pub(crate) fn sanitize_str(raw: &str, max_len: usize) -> String {
    let mut out = String::with_capacity(raw.len().min(max_len));
    let mut pending_space = false;

    for c in raw.trim().chars().take(max_len) {
        if is_stripped_control(c) || is_stripped_markup(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        // Dropping characters can expose whitespace at the front, so only
        // flush a separator once something has been emitted.
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

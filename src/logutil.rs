//! Keep logged data-file text on one line.
//!
//! News bodies and hand-authored titles contain newlines, tabs, and the odd
//! stray control character; these helpers escape them before they reach a log.

use std::fmt::Write;

/// Default cap on escaped output, in characters.
pub const MAX_PREVIEW: usize = 300;

/// Escape `s` for single-line logging, truncating after [`MAX_PREVIEW`] characters.
pub fn escape_log(s: &str) -> String {
    escape_log_limited(s, MAX_PREVIEW)
}

/// Like [`escape_log`] with an explicit cap. Backslash and `\n`/`\r`/`\t`
/// get their usual escapes, any other control character becomes `\xNN`, and
/// text past `max_chars` is cut with an ellipsis.
pub fn escape_log_limited(s: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(s.len().min(max_chars) + 8);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(max_chars) {
        push_escaped(&mut out, ch);
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    let simple = match ch {
        '\\' => "\\\\",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        c if c.is_control() => {
            let _ = write!(out, "\\x{:02X}", c as u32);
            return;
        }
        c => {
            out.push(c);
            return;
        }
    };
    out.push_str(simple);
}

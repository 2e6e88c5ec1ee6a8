//! String helpers shared by the converter and the formatter.

use unicode_width::UnicodeWidthStr;

/// Characters that may appear in a string leaf without quoting.
fn is_plain_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.' | '/' | ':' | '+' | '@' | '%')
}

/// Returns `true` if `s` can be printed as a bare token.
pub fn is_plain(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_plain_char)
}

/// Renders a string value for a leaf: bare when plain, otherwise
/// double-quoted with JSON-style escapes.
///
/// ```
/// use asdl_runtime::strings::quote;
///
/// assert_eq!(quote("v1"), "v1");
/// assert_eq!(quote("a b"), "\"a b\"");
/// assert_eq!(quote(""), "\"\"");
/// assert_eq!(quote("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
/// ```
pub fn quote(s: &str) -> String {
    if is_plain(s) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 || c == '\u{007F}' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Number of terminal columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Escape text for inclusion in HTML element content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

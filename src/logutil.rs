//! Helpers for keeping keystrokes readable in single-line log output.

use std::fmt::Write;

/// Render every character as a `\uXXXX` escape (upper-case hex, at least four
/// digits), so raw control keys show up in logs instead of moving the cursor.
pub fn escape_unicode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 6);
    for ch in s.chars() {
        let _ = write!(&mut out, "\\u{:04X}", ch as u32);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_unicode;

    #[test]
    fn escapes_control_keys() {
        assert_eq!(escape_unicode("\r"), "\\u000D");
        assert_eq!(escape_unicode("\u{3}"), "\\u0003");
    }

    #[test]
    fn escapes_printable_text() {
        assert_eq!(escape_unicode("Ab"), "\\u0041\\u0062");
        assert_eq!(escape_unicode(""), "");
    }

    #[test]
    fn keeps_wide_code_points() {
        assert_eq!(escape_unicode("😀"), "\\u1F600");
    }
}

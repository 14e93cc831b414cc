//! Output escaping for JSON strings.

/// Escapes the characters this codec protects on output: backslash, double
/// quote, newline, carriage return, and tab.
///
/// Other C0 control characters pass through raw. That mirrors the wire
/// behavior the rest of the system was built against; tightening it to
/// full RFC 8259 escaping would change serialized payloads.
pub fn escape_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            ch => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_json_string() {
        assert_eq!(escape_json_string("hello"), "hello");
        assert_eq!(escape_json_string("hello\"world"), "hello\\\"world");
        assert_eq!(escape_json_string("hello\\world"), "hello\\\\world");
        assert_eq!(escape_json_string("hello\nworld"), "hello\\nworld");
        assert_eq!(escape_json_string("hello\rworld"), "hello\\rworld");
        assert_eq!(escape_json_string("hello\tworld"), "hello\\tworld");
    }

    #[test]
    fn test_other_control_characters_not_escaped() {
        assert_eq!(escape_json_string("a\u{0007}b"), "a\u{0007}b");
        assert_eq!(escape_json_string("a\u{0008}b"), "a\u{0008}b");
        assert_eq!(escape_json_string("a\u{000C}b"), "a\u{000C}b");
    }
}

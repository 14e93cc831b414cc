//! Recursive-descent JSON parsing.

use crate::error::{JsonError, Result};
use crate::object::JsonObject;
use crate::value::{JsonValue, Number};

/// Parses a JSON document into a [`JsonValue`].
///
/// Handles objects, arrays, strings (with escape sequences), numbers,
/// booleans, and null. Exactly one top-level value is accepted; anything
/// but whitespace after it is an error.
///
/// # Errors
///
/// Returns [`JsonError::Malformed`] for empty or whitespace-only input,
/// missing delimiters, unknown escape sequences, truncated unicode
/// escapes, bad literals, and trailing data.
///
/// # Examples
///
/// ```
/// use json_codec::parse;
///
/// let value = parse(r#"{"table": "12", "covers": 4}"#).unwrap();
/// let obj = value.as_object().unwrap();
/// assert_eq!(obj.get("table").and_then(|v| v.as_str()), Some("12"));
/// assert_eq!(obj.get("covers").and_then(|v| v.as_i64()), Some(4));
/// ```
pub fn parse(input: &str) -> Result<JsonValue> {
    let mut parser = Parser::new(input);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if !parser.is_at_end() {
        return Err(JsonError::Malformed(
            "unexpected trailing data after JSON value".to_string(),
        ));
    }
    Ok(value)
}

/// Parses a JSON document whose top-level value must be an object.
///
/// # Errors
///
/// Returns [`JsonError::NotAnObject`] when the document is valid JSON but
/// the top-level value is not an object, and [`JsonError::Malformed`] for
/// the same syntax violations as [`parse`].
pub fn parse_object(input: &str) -> Result<JsonObject> {
    match parse(input)? {
        JsonValue::Object(map) => Ok(map),
        _ => Err(JsonError::NotAnObject),
    }
}

/// Cursor-based parser state. The position only ever moves forward.
struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser { input, position: 0 }
    }

    fn parse_value(&mut self) -> Result<JsonValue> {
        self.skip_whitespace();

        match self.peek() {
            None => Err(JsonError::Malformed(
                "unexpected end of JSON input".to_string(),
            )),
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('"') => self.parse_string().map(JsonValue::String),
            Some('t') | Some('f') => self.parse_boolean(),
            Some('n') => self.parse_null(),
            // Everything else is treated as a number; garbage falls out of
            // the final numeric parse.
            Some(_) => self.parse_number(),
        }
    }

    fn parse_object(&mut self) -> Result<JsonValue> {
        self.expect('{')?;
        let mut map = JsonObject::new();

        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.advance();
            return Ok(JsonValue::Object(map));
        }

        loop {
            self.skip_whitespace();
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.expect(':')?;
            let value = self.parse_value()?;
            // Duplicate keys: last value wins, first position is kept.
            map.insert(key, value);

            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.advance();
                break;
            }
            self.expect(',')?;
        }

        Ok(JsonValue::Object(map))
    }

    fn parse_array(&mut self) -> Result<JsonValue> {
        self.expect('[')?;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.advance();
            return Ok(JsonValue::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.advance();
                break;
            }
            self.expect(',')?;
        }

        Ok(JsonValue::Array(items))
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect('"')?;
        let mut result = String::new();

        loop {
            let ch = match self.peek() {
                Some(ch) => ch,
                None => {
                    return Err(JsonError::Malformed(
                        "unterminated string literal".to_string(),
                    ));
                }
            };
            self.advance();

            match ch {
                '"' => return Ok(result),
                '\\' => {
                    let escape = self.peek().ok_or_else(|| {
                        JsonError::Malformed("unterminated escape sequence".to_string())
                    })?;
                    self.advance();
                    match escape {
                        '"' => result.push('"'),
                        '\\' => result.push('\\'),
                        '/' => result.push('/'),
                        'b' => result.push('\u{0008}'),
                        'f' => result.push('\u{000C}'),
                        'n' => result.push('\n'),
                        'r' => result.push('\r'),
                        't' => result.push('\t'),
                        'u' => {
                            let code = self.parse_unicode_escape()?;
                            match char::from_u32(code) {
                                Some(ch) => result.push(ch),
                                // Lone surrogates cannot live in a Rust
                                // string.
                                None => {
                                    return Err(JsonError::Malformed(format!(
                                        "invalid unicode escape \\u{:04X}",
                                        code
                                    )));
                                }
                            }
                        }
                        other => {
                            return Err(JsonError::Malformed(format!(
                                "unknown escape sequence \\{}",
                                other
                            )));
                        }
                    }
                }
                other => result.push(other),
            }
        }
    }

    fn parse_unicode_escape(&mut self) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let ch = self.peek().ok_or_else(|| {
                JsonError::Malformed("incomplete unicode escape".to_string())
            })?;
            let digit = ch.to_digit(16).ok_or_else(|| {
                JsonError::Malformed(format!("invalid hex digit '{}' in unicode escape", ch))
            })?;
            self.advance();
            code = code * 16 + digit;
        }
        Ok(code)
    }

    /// Scans the shape `-? digits (. digits)? ([eE] [+-]? digits)?` without
    /// validating digit runs, then classifies the literal: a fraction or
    /// exponent makes it a float, otherwise it is parsed as `i64`, falling
    /// back to `f64` when the integer overflows.
    ///
    /// The loose scan means `01` parses as `1` and a bare `-` fails only at
    /// the final numeric parse; both are pinned by tests below.
    fn parse_number(&mut self) -> Result<JsonValue> {
        let start = self.position;

        if self.peek() == Some('-') {
            self.advance();
        }
        self.consume_digits();
        if self.peek() == Some('.') {
            self.advance();
            self.consume_digits();
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            self.advance();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.advance();
            }
            self.consume_digits();
        }

        let literal = &self.input[start..self.position];
        let malformed = || JsonError::Malformed(format!("invalid number literal '{}'", literal));

        if literal.contains(['.', 'e', 'E']) {
            let value = literal.parse::<f64>().map_err(|_| malformed())?;
            Ok(JsonValue::Number(Number::Float(value)))
        } else {
            match literal.parse::<i64>() {
                Ok(value) => Ok(JsonValue::Number(Number::Int(value))),
                Err(_) => {
                    // Integral overflow: widen to f64 at the cost of
                    // precision.
                    let value = literal.parse::<f64>().map_err(|_| malformed())?;
                    Ok(JsonValue::Number(Number::Float(value)))
                }
            }
        }
    }

    fn parse_boolean(&mut self) -> Result<JsonValue> {
        if self.input[self.position..].starts_with("true") {
            self.position += 4;
            Ok(JsonValue::Bool(true))
        } else if self.input[self.position..].starts_with("false") {
            self.position += 5;
            Ok(JsonValue::Bool(false))
        } else {
            Err(JsonError::Malformed("invalid boolean literal".to_string()))
        }
    }

    fn parse_null(&mut self) -> Result<JsonValue> {
        if self.input[self.position..].starts_with("null") {
            self.position += 4;
            Ok(JsonValue::Null)
        } else {
            Err(JsonError::Malformed("invalid null literal".to_string()))
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            Some(ch) => Err(JsonError::Malformed(format!(
                "expected '{}' but found '{}'",
                expected, ch
            ))),
            None => Err(JsonError::Malformed(format!(
                "expected '{}' but found end of input",
                expected
            ))),
        }
    }

    fn consume_digits(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_object() {
        let value = parse(r#"{"key": "value"}"#).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("key").and_then(|v| v.as_str()), Some("value"));
    }

    #[test]
    fn test_parse_nested_object() {
        let value = parse(r#"{"user": {"name": "Alice", "age": 30}}"#).unwrap();
        let user = value
            .as_object()
            .and_then(|obj| obj.get("user"))
            .and_then(|v| v.as_object())
            .unwrap();
        assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("Alice"));
        assert_eq!(user.get("age").and_then(|v| v.as_i64()), Some(30));
    }

    #[test]
    fn test_parse_array() {
        let value = parse(r#"["a", "b", "c"]"#).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0].as_str(), Some("a"));
    }

    #[test]
    fn test_parse_empty_containers() {
        assert_eq!(parse("{}").unwrap(), JsonValue::Object(JsonObject::new()));
        assert_eq!(parse("[]").unwrap(), JsonValue::Array(Vec::new()));
    }

    #[test]
    fn test_parse_integer_and_float_kinds() {
        assert_eq!(parse("42").unwrap(), JsonValue::Number(Number::Int(42)));
        assert_eq!(
            parse("42.0").unwrap(),
            JsonValue::Number(Number::Float(42.0))
        );
        assert_eq!(
            parse("4.2e1").unwrap(),
            JsonValue::Number(Number::Float(42.0))
        );
        assert_eq!(parse("-17").unwrap(), JsonValue::Number(Number::Int(-17)));
    }

    #[test]
    fn test_parse_integer_overflow_widens_to_float() {
        let value = parse("99999999999999999999999").unwrap();
        match value {
            JsonValue::Number(Number::Float(f)) => assert!(f > 9.9e22),
            other => panic!("expected float fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_leading_zero_is_accepted() {
        // The loose numeric scan inherited from the reference behavior.
        assert_eq!(parse("01").unwrap(), JsonValue::Number(Number::Int(1)));
    }

    #[test]
    fn test_bare_minus_is_rejected() {
        assert!(matches!(parse("-"), Err(JsonError::Malformed(_))));
    }

    #[test]
    fn test_parse_boolean_and_null() {
        assert_eq!(parse("true").unwrap(), JsonValue::Bool(true));
        assert_eq!(parse("false").unwrap(), JsonValue::Bool(false));
        assert_eq!(parse("null").unwrap(), JsonValue::Null);
    }

    #[test]
    fn test_bad_literals_rejected() {
        assert!(matches!(parse("tru"), Err(JsonError::Malformed(_))));
        assert!(matches!(parse("nil"), Err(JsonError::Malformed(_))));
        assert!(matches!(parse("falsy"), Err(JsonError::Malformed(_))));
    }

    #[test]
    fn test_parse_string_with_escapes() {
        let value = parse(r#""a\nb""#).unwrap();
        assert_eq!(value.as_str(), Some("a\nb"));

        let value = parse(r#""tab\tquote\"slash\/""#).unwrap();
        assert_eq!(value.as_str(), Some("tab\tquote\"slash/"));
    }

    #[test]
    fn test_parse_unicode_escape() {
        let value = parse(r#""\u0041""#).unwrap();
        assert_eq!(value.as_str(), Some("A"));

        let value = parse(r#""\u00E9""#).unwrap();
        assert_eq!(value.as_str(), Some("é"));
    }

    #[test]
    fn test_truncated_unicode_escape_rejected() {
        assert!(matches!(parse(r#""\u12""#), Err(JsonError::Malformed(_))));
        assert!(matches!(parse(r#""\u12"#), Err(JsonError::Malformed(_))));
    }

    #[test]
    fn test_lone_surrogate_escape_rejected() {
        assert!(matches!(parse(r#""\uD800""#), Err(JsonError::Malformed(_))));
    }

    #[test]
    fn test_unknown_escape_rejected() {
        assert!(matches!(parse(r#""\x""#), Err(JsonError::Malformed(_))));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(parse(""), Err(JsonError::Malformed(_))));
        assert!(matches!(parse("   \n\t "), Err(JsonError::Malformed(_))));
    }

    #[test]
    fn test_trailing_data_rejected() {
        assert!(matches!(parse("{}garbage"), Err(JsonError::Malformed(_))));
        assert!(matches!(
            parse(r#"{"key": "value"} extra"#),
            Err(JsonError::Malformed(_))
        ));
        // Trailing whitespace alone is fine.
        assert!(parse("{} \n").is_ok());
    }

    #[test]
    fn test_incomplete_documents_rejected() {
        assert!(parse("{").is_err());
        assert!(parse(r#"{"key":"#).is_err());
        assert!(parse(r#""unterminated"#).is_err());
        assert!(parse("[1, 2").is_err());
    }

    #[test]
    fn test_duplicate_keys_keep_position_take_last_value() {
        let obj = parse_object(r#"{"a":1,"b":2,"a":3}"#).unwrap();
        let keys: Vec<&str> = obj.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(obj.get("a").and_then(|v| v.as_i64()), Some(3));
        assert_eq!(obj.get("b").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_parse_object_rejects_non_objects() {
        assert_eq!(parse_object("[1,2,3]"), Err(JsonError::NotAnObject));
        assert_eq!(parse_object("\"text\""), Err(JsonError::NotAnObject));
        assert_eq!(parse_object("42"), Err(JsonError::NotAnObject));
        assert!(matches!(parse_object("{"), Err(JsonError::Malformed(_))));
    }

    #[test]
    fn test_whitespace_between_tokens_ignored() {
        let compact = parse(r#"{"a":[1,2],"b":{"c":true}}"#).unwrap();
        let spaced = parse(" {\n\t\"a\" : [ 1 , 2 ] ,\r\n \"b\" : { \"c\" : true } } ").unwrap();
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_expected_found_messages() {
        match parse(r#"{"a" 1}"#) {
            Err(JsonError::Malformed(msg)) => {
                assert!(msg.contains("expected ':'"), "message was: {}", msg);
                assert!(msg.contains("'1'"), "message was: {}", msg);
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }
}

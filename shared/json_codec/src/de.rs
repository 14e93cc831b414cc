//! Deserialization from JSON to Rust types.

use crate::error::{JsonError, Result};
use crate::value::JsonValue;

/// Trait for types that can be deserialized from JSON.
pub trait Deserialize: Sized {
    /// Deserializes a value from a JSON value.
    fn deserialize(value: &JsonValue) -> Result<Self>;

    /// Deserializes from a JSON string.
    fn from_str(s: &str) -> Result<Self> {
        let value = crate::parse(s)?;
        Self::deserialize(&value)
    }
}

fn mismatch(expected: &str, found: &JsonValue) -> JsonError {
    JsonError::Malformed(format!("expected {}, found {}", expected, found))
}

impl Deserialize for String {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| mismatch("string", value))
    }
}

impl Deserialize for bool {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl Deserialize for f64 {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }
}

impl Deserialize for i32 {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        let num = value.as_f64().ok_or_else(|| mismatch("number", value))?;
        Ok(num as i32)
    }
}

impl Deserialize for i64 {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        let num = value.as_f64().ok_or_else(|| mismatch("number", value))?;
        Ok(num as i64)
    }
}

impl Deserialize for u32 {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        let num = value.as_f64().ok_or_else(|| mismatch("number", value))?;
        Ok(num as u32)
    }
}

impl Deserialize for u64 {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        let num = value.as_f64().ok_or_else(|| mismatch("number", value))?;
        Ok(num as u64)
    }
}

impl Deserialize for usize {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        let num = value.as_f64().ok_or_else(|| mismatch("number", value))?;
        Ok(num as usize)
    }
}

impl<T: Deserialize> Deserialize for Vec<T> {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        let arr = value.as_array().ok_or_else(|| mismatch("array", value))?;
        arr.iter().map(|v| T::deserialize(v)).collect()
    }
}

impl<T: Deserialize> Deserialize for Option<T> {
    fn deserialize(value: &JsonValue) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::deserialize(value)?))
        }
    }
}

/// Deserializes a value of type `T` from a JSON string.
pub fn from_str<T: Deserialize>(s: &str) -> Result<T> {
    T::from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn test_deserialize_string() {
        let result: String = from_str(r#""hello""#).unwrap();
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_deserialize_numbers() {
        let result: i32 = from_str("42").unwrap();
        assert_eq!(result, 42);
        let result: u32 = from_str("42").unwrap();
        assert_eq!(result, 42);
        let result: f64 = from_str("42").unwrap();
        assert_eq!(result, 42.0);
        let result: f64 = from_str("1.5").unwrap();
        assert_eq!(result, 1.5);
        // Fractional part truncates toward zero for integer targets.
        let result: i32 = from_str("-42.5").unwrap();
        assert_eq!(result, -42);
    }

    #[test]
    fn test_deserialize_bool() {
        let result: bool = from_str("true").unwrap();
        assert!(result);
    }

    #[test]
    fn test_deserialize_vec() {
        let result: Vec<i32> = from_str("[1,2,3]").unwrap();
        assert_eq!(result, vec![1, 2, 3]);

        let result: Vec<i32> = from_str("[]").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_deserialize_option() {
        let result: Option<String> = from_str(r#""hello""#).unwrap();
        assert_eq!(result, Some("hello".to_string()));

        let result: Option<String> = from_str("null").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_type_mismatch_errors() {
        assert!(from_str::<i32>(r#""not a number""#).is_err());
        assert!(from_str::<bool>("42").is_err());
        assert!(from_str::<String>("{}").is_err());
        assert!(from_str::<Vec<i32>>("{}").is_err());
    }

    #[test]
    fn test_mismatch_message_names_found_value() {
        let err = String::deserialize(&JsonValue::Number(Number::Int(7))).unwrap_err();
        assert!(err.to_string().contains("expected string"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_from_str_with_whitespace() {
        let result: String = from_str(r#"  "hello world"  "#).unwrap();
        assert_eq!(result, "hello world");
    }

    #[test]
    fn test_from_str_malformed_json() {
        assert!(from_str::<String>(r#"{ "incomplete": "#).is_err());
    }
}

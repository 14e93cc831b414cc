//! JSON value representation.

use crate::object::JsonObject;
use std::fmt;

/// Represents a JSON value: object, array, string, number, boolean, or null.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// JSON object: `{"key": "value"}`. Iteration order is insertion order.
    Object(JsonObject),
    /// JSON array: `["item1", "item2"]`
    Array(Vec<JsonValue>),
    /// JSON string: `"hello"`, already unescaped
    String(String),
    /// JSON number: `42` or `3.14`
    Number(Number),
    /// JSON boolean: `true` or `false`
    Bool(bool),
    /// JSON null: `null`
    Null,
}

/// A JSON number, tagged by how its literal was written.
///
/// The tag is part of the value's identity: `Int(42)` and `Float(42.0)`
/// compare unequal and serialize to `42` and `42.0` respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Literal without fraction or exponent, e.g. `42`.
    Int(i64),
    /// Literal with a fraction or exponent, e.g. `42.0` or `4.2e1`.
    Float(f64),
}

impl Number {
    /// Returns the value as an `f64`, converting integers losslessly where
    /// possible.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Returns the value if it was written as an integer literal.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::Float(_) => None,
        }
    }

    /// Returns true for integer-literal numbers.
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    fn write_json(&self, out: &mut String) {
        match self {
            Number::Int(i) => out.push_str(&i.to_string()),
            Number::Float(f) => {
                if f.is_finite() {
                    let text = f.to_string();
                    let needs_marker = !text.contains(['.', 'e', 'E']);
                    out.push_str(&text);
                    // Keep the float marker so the kind survives a re-parse.
                    if needs_marker {
                        out.push_str(".0");
                    }
                } else {
                    // JSON has no literal for NaN or infinity.
                    out.push_str("null");
                }
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_json(&mut out);
        write!(f, "{}", out)
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_string())
    }
}

impl JsonValue {
    /// Renders the value as minified JSON text. Total: never fails for any
    /// value tree.
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        self.write_json(&mut out);
        out
    }

    fn write_json(&self, out: &mut String) {
        match self {
            JsonValue::Null => out.push_str("null"),
            JsonValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            JsonValue::Number(n) => n.write_json(out),
            JsonValue::String(s) => {
                out.push('"');
                out.push_str(&crate::serializer::escape_json_string(s));
                out.push('"');
            }
            JsonValue::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_json(out);
                }
                out.push(']');
            }
            JsonValue::Object(map) => {
                out.push('{');
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push('"');
                    out.push_str(&crate::serializer::escape_json_string(key));
                    out.push_str("\":");
                    value.write_json(out);
                }
                out.push('}');
            }
        }
    }

    /// Returns the string value if this is a JSON string, otherwise None.
    pub fn as_str(&self) -> Option<&str> {
        if let JsonValue::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Returns the number if this is a JSON number, otherwise None.
    pub fn as_number(&self) -> Option<Number> {
        if let JsonValue::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Returns the numeric value as `f64` regardless of literal kind.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }

    /// Returns the integer value if this number was an integer literal.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    /// Returns the boolean value if this is a JSON boolean, otherwise None.
    pub fn as_bool(&self) -> Option<bool> {
        if let JsonValue::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns true if this is JSON null.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns the object if this is a JSON object, otherwise None.
    pub fn as_object(&self) -> Option<&JsonObject> {
        if let JsonValue::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Returns the mutable object if this is a JSON object, otherwise None.
    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        if let JsonValue::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Returns the array if this is a JSON array, otherwise None.
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        if let JsonValue::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// Returns the mutable array if this is a JSON array, otherwise None.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        if let JsonValue::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }
}

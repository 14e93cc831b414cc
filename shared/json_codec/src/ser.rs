//! Serialization from Rust types to JSON.
//!
//! There is no runtime type inspection here: callers build [`JsonValue`]
//! trees through these impls and the tree serializes itself.

use crate::object::JsonObject;
use crate::value::{JsonValue, Number};

/// Trait for types that can be serialized to JSON.
pub trait Serialize {
    /// Serializes a value to a JSON value.
    fn serialize(&self) -> JsonValue;

    /// Serializes to minified JSON text.
    fn to_json_string(&self) -> String {
        self.serialize().to_json_string()
    }
}

impl Serialize for JsonValue {
    fn serialize(&self) -> JsonValue {
        self.clone()
    }
}

impl Serialize for JsonObject {
    fn serialize(&self) -> JsonValue {
        JsonValue::Object(self.clone())
    }
}

impl Serialize for String {
    fn serialize(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl Serialize for &str {
    fn serialize(&self) -> JsonValue {
        JsonValue::String((*self).to_string())
    }
}

impl Serialize for bool {
    fn serialize(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

impl Serialize for f64 {
    fn serialize(&self) -> JsonValue {
        JsonValue::Number(Number::Float(*self))
    }
}

impl Serialize for f32 {
    fn serialize(&self) -> JsonValue {
        JsonValue::Number(Number::Float(*self as f64))
    }
}

impl Serialize for i32 {
    fn serialize(&self) -> JsonValue {
        JsonValue::Number(Number::Int(i64::from(*self)))
    }
}

impl Serialize for i64 {
    fn serialize(&self) -> JsonValue {
        JsonValue::Number(Number::Int(*self))
    }
}

impl Serialize for u32 {
    fn serialize(&self) -> JsonValue {
        JsonValue::Number(Number::Int(i64::from(*self)))
    }
}

impl Serialize for u64 {
    fn serialize(&self) -> JsonValue {
        match i64::try_from(*self) {
            Ok(value) => JsonValue::Number(Number::Int(value)),
            Err(_) => JsonValue::Number(Number::Float(*self as f64)),
        }
    }
}

impl Serialize for usize {
    fn serialize(&self) -> JsonValue {
        match i64::try_from(*self) {
            Ok(value) => JsonValue::Number(Number::Int(value)),
            Err(_) => JsonValue::Number(Number::Float(*self as f64)),
        }
    }
}

impl<T: Serialize> Serialize for Vec<T> {
    fn serialize(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(|v| v.serialize()).collect())
    }
}

impl<T: Serialize> Serialize for Option<T> {
    fn serialize(&self) -> JsonValue {
        match self {
            Some(v) => v.serialize(),
            None => JsonValue::Null,
        }
    }
}

impl<T: Serialize> Serialize for &T {
    fn serialize(&self) -> JsonValue {
        (*self).serialize()
    }
}

/// Serializes any [`Serialize`] value to minified JSON text. Total: never
/// fails.
pub fn to_string<T: Serialize>(value: &T) -> String {
    value.to_json_string()
}

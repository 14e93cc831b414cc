//! Macros for JSON serialization.

/// Implements both `Serialize` and `Deserialize` for a plain struct.
///
/// Serialization emits fields in declaration order. Deserialization starts
/// from `Self::default()` and overrides the fields present in the JSON, so
/// missing fields keep their default values.
///
/// # Examples
///
/// ```
/// use json_codec::{from_str, impl_json, to_string};
///
/// #[derive(Debug, Default)]
/// struct Station {
///     name: String,
///     covers: u32,
/// }
///
/// impl_json! {
///     Station {
///         name: String,
///         covers: u32,
///     }
/// }
///
/// let station: Station = from_str(r#"{"name":"patio"}"#).unwrap();
/// assert_eq!(station.name, "patio");
/// assert_eq!(station.covers, 0); // default kept
/// assert_eq!(to_string(&station), r#"{"name":"patio","covers":0}"#);
/// ```
#[macro_export]
macro_rules! impl_json {
    ($struct_name:ident { $($field:ident: $field_ty:ty),* $(,)? }) => {
        impl $crate::Serialize for $struct_name {
            fn serialize(&self) -> $crate::JsonValue {
                let mut map = $crate::JsonObject::new();
                $(
                    map.insert(
                        stringify!($field).to_string(),
                        $crate::Serialize::serialize(&self.$field),
                    );
                )*
                $crate::JsonValue::Object(map)
            }
        }

        impl $crate::Deserialize for $struct_name {
            fn deserialize(value: &$crate::JsonValue) -> Result<Self, $crate::JsonError> {
                let obj = value.as_object().ok_or_else(|| $crate::JsonError::Malformed(
                    format!("expected object for {}", stringify!($struct_name))
                ))?;

                let mut result = Self::default();
                $(
                    if let Some(field_value) = obj.get(stringify!($field)) {
                        result.$field =
                            <$field_ty as $crate::Deserialize>::deserialize(field_value)?;
                    }
                )*

                Ok(result)
            }
        }
    };
}

use json_codec::{JsonObject, JsonValue, Number};

pub fn get_string_field(obj: &JsonObject, field: &str) -> Result<String, String> {
    obj.get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("Missing {}", field))
        .map(|s| s.to_string())
}

/// Coerces an optional field to a string: strings pass through, numbers
/// and booleans use their JSON text, anything else falls back to the
/// default.
pub fn string_field_or(obj: &JsonObject, field: &str, default: &str) -> String {
    match obj.get(field) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(value @ JsonValue::Number(_)) | Some(value @ JsonValue::Bool(_)) => value.to_string(),
        _ => default.to_string(),
    }
}

pub fn insert_string(map: &mut JsonObject, key: &str, value: &str) {
    map.insert(key.to_string(), JsonValue::String(value.to_string()));
}

pub fn insert_int(map: &mut JsonObject, key: &str, value: i64) {
    map.insert(key.to_string(), JsonValue::Number(Number::Int(value)));
}

pub fn insert_float(map: &mut JsonObject, key: &str, value: f64) {
    map.insert(key.to_string(), JsonValue::Number(Number::Float(value)));
}

pub fn insert_value(map: &mut JsonObject, key: &str, value: JsonValue) {
    map.insert(key.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_codec::parse_object;

    #[test]
    fn test_get_string_field() {
        let obj = parse_object(r#"{"code":"MNS-01"}"#).unwrap();
        assert_eq!(get_string_field(&obj, "code").unwrap(), "MNS-01");
        assert_eq!(
            get_string_field(&obj, "missing").unwrap_err(),
            "Missing missing"
        );
    }

    #[test]
    fn test_string_field_or_coercions() {
        let obj = parse_object(r#"{"table":7,"vip":true,"notes":null}"#).unwrap();
        assert_eq!(string_field_or(&obj, "table", "TBD"), "7");
        assert_eq!(string_field_or(&obj, "vip", ""), "true");
        assert_eq!(string_field_or(&obj, "notes", ""), "");
        assert_eq!(string_field_or(&obj, "absent", "TBD"), "TBD");
    }
}

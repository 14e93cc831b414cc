//! Menu payload for `GET /api/menu`.

use json_codec::{JsonObject, JsonValue};

use super::json_helpers::{insert_float, insert_string, insert_value};
use crate::infrastructure::MenuCatalog;

/// Builds `{"categories":[{"category":...,"items":[...]}]}` preserving the
/// catalog's display order.
pub fn menu_payload(catalog: &MenuCatalog) -> JsonValue {
    let mut categories = Vec::with_capacity(catalog.categories().len());
    for (name, items) in catalog.categories() {
        let mut nodes = Vec::with_capacity(items.len());
        for item in items {
            let mut info = JsonObject::new();
            insert_string(&mut info, "code", item.code());
            insert_string(&mut info, "name", item.name());
            insert_string(&mut info, "description", item.description());
            insert_float(&mut info, "price", item.price());
            nodes.push(JsonValue::Object(info));
        }

        let mut node = JsonObject::new();
        insert_string(&mut node, "category", name);
        insert_value(&mut node, "items", JsonValue::Array(nodes));
        categories.push(JsonValue::Object(node));
    }

    let mut payload = JsonObject::new();
    insert_value(&mut payload, "categories", JsonValue::Array(categories));
    JsonValue::Object(payload)
}

//! Order intake and summary payloads.

use json_codec::{JsonObject, JsonValue};

use super::json_helpers::{
    get_string_field, insert_float, insert_int, insert_string, insert_value, string_field_or,
};
use crate::domain::Order;

/// Decoded order-creation payload, before menu codes are resolved.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub table: String,
    pub notes: String,
    pub items: Vec<OrderLineRequest>,
}

#[derive(Debug, Clone)]
pub struct OrderLineRequest {
    pub code: String,
    pub quantity: u32,
}

impl OrderRequest {
    /// Decodes the `POST /api/orders` body: a required non-empty `items`
    /// array of `{code, quantity?}` objects, plus optional `table` and
    /// `notes` coerced to strings with defaults.
    pub fn from_payload(payload: &JsonObject) -> Result<Self, String> {
        let items = payload
            .get("items")
            .and_then(|v| v.as_array())
            .ok_or("Order must include at least one item")?;
        if items.is_empty() {
            return Err("Order must include at least one item".to_string());
        }

        let mut lines = Vec::with_capacity(items.len());
        for entry in items {
            let obj = entry
                .as_object()
                .ok_or("Order items must be JSON objects")?;
            let code = get_string_field(obj, "code")?;
            // Absent or non-numeric quantity means one; anything below one
            // is floored.
            let quantity = obj
                .get("quantity")
                .and_then(|v| v.as_f64())
                .map(|q| (q as i64).max(1) as u32)
                .unwrap_or(1);
            lines.push(OrderLineRequest { code, quantity });
        }

        Ok(OrderRequest {
            table: string_field_or(payload, "table", "TBD"),
            notes: string_field_or(payload, "notes", ""),
            items: lines,
        })
    }
}

/// Builds the order summary returned by `GET /api/orders` and order
/// creation.
pub fn order_summary(order: &Order) -> JsonValue {
    let mut items = Vec::with_capacity(order.items().len());
    for line in order.items() {
        let mut node = JsonObject::new();
        insert_string(&mut node, "name", line.menu_item().name());
        insert_int(&mut node, "quantity", i64::from(line.quantity()));
        insert_float(&mut node, "lineTotal", line.line_total());
        items.push(JsonValue::Object(node));
    }

    let mut map = JsonObject::new();
    insert_string(&mut map, "id", order.id());
    insert_string(&mut map, "table", order.table_number());
    insert_string(&mut map, "notes", order.notes());
    insert_float(&mut map, "subtotal", order.subtotal());
    insert_float(&mut map, "tax", order.tax());
    insert_float(&mut map, "total", order.total());
    insert_string(
        &mut map,
        "placedAt",
        &order.placed_at().format("%b %d %H:%M").to_string(),
    );
    insert_value(&mut map, "items", JsonValue::Array(items));
    JsonValue::Object(map)
}

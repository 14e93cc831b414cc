//! Wire payloads for the JSON API.

pub mod json_helpers;
pub mod menu;
pub mod order;

pub use menu::menu_payload;
pub use order::{OrderLineRequest, OrderRequest, order_summary};

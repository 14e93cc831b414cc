use chrono::{DateTime, Local};
use rand::Rng;

use crate::domain::{MenuItem, OrderItem, OrderStatus};

/// Flat sales tax applied to every order.
pub const TAX_RATE: f64 = 0.08;

/// A guest order: id, timestamp, line items, status, and table metadata.
#[derive(Debug, Clone)]
pub struct Order {
    id: String,
    placed_at: DateTime<Local>,
    items: Vec<OrderItem>,
    status: OrderStatus,
    table_number: String,
    notes: String,
}

impl Order {
    pub fn new() -> Self {
        Order {
            id: generate_order_id(),
            placed_at: Local::now(),
            items: Vec::new(),
            status: OrderStatus::New,
            table_number: "TBD".to_string(),
            notes: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn placed_at(&self) -> DateTime<Local> {
        self.placed_at
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn table_number(&self) -> &str {
        &self.table_number
    }

    pub fn set_table_number(&mut self, table_number: String) {
        self.table_number = table_number;
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Adds `quantity` of a menu item, merging with an existing line for
    /// the same menu code.
    pub fn add_item(&mut self, menu_item: MenuItem, quantity: u32) {
        match self
            .items
            .iter_mut()
            .find(|line| line.menu_item().code() == menu_item.code())
        {
            Some(line) => line.increase_quantity(quantity),
            None => self.items.push(OrderItem::new(menu_item, quantity)),
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn tax(&self) -> f64 {
        self.subtotal() * TAX_RATE
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.tax()
    }

    /// One-line description for logs and the history panel.
    pub fn summary_line(&self) -> String {
        format!(
            "#{} • Table {} • {} • ${:.2}",
            self.id,
            self.table_number,
            self.placed_at.format("%b %d %H:%M"),
            self.total()
        )
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

/// 8-character uppercase alphanumeric ticket id.
fn generate_order_id() -> String {
    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut rng = rand::thread_rng();
    (0..8)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

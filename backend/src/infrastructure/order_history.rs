//! Bounded, thread-safe order history.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::{Order, OrderStatus};

/// Minimum history size regardless of configuration.
const MIN_HISTORY_LIMIT: usize = 5;

/// Ring buffer of recently served orders, newest first.
///
/// Clones share the same buffer; every handler thread gets its own handle.
#[derive(Clone)]
pub struct OrderHistory {
    orders: Arc<Mutex<VecDeque<Order>>>,
    limit: usize,
}

impl OrderHistory {
    pub fn new(limit: usize) -> Self {
        OrderHistory {
            orders: Arc::new(Mutex::new(VecDeque::new())),
            limit: limit.max(MIN_HISTORY_LIMIT),
        }
    }

    /// Marks the order served and records it, evicting the oldest entry
    /// once the buffer is full. Returns the order as recorded.
    pub fn record(&self, mut order: Order) -> Order {
        order.set_status(OrderStatus::Served);
        if let Ok(mut orders) = self.orders.lock() {
            orders.push_front(order.clone());
            while orders.len() > self.limit {
                orders.pop_back();
            }
        }
        order
    }

    /// Snapshot of the history, newest first.
    pub fn recent(&self) -> Vec<Order> {
        self.orders
            .lock()
            .map(|orders| orders.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.orders.lock().map(|orders| orders.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut orders) = self.orders.lock() {
            orders.clear();
        }
    }
}

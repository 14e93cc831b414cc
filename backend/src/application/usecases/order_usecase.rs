//! Order placement and listing use cases.

use std::sync::Arc;

use crate::domain::Order;
use crate::http::messages::OrderRequest;
use crate::infrastructure::{MenuCatalog, OrderHistory};

/// Order placement and listing logic.
#[derive(Clone)]
pub struct OrderUseCase {
    catalog: Arc<MenuCatalog>,
    history: OrderHistory,
    logger: logging::Logger,
}

impl OrderUseCase {
    pub fn new(catalog: Arc<MenuCatalog>, history: OrderHistory, logger: logging::Logger) -> Self {
        OrderUseCase {
            catalog,
            history,
            logger,
        }
    }

    /// Resolves a decoded request against the menu and records the order.
    ///
    /// Fails with a client-facing message when any line references an
    /// unknown menu code; nothing is recorded in that case.
    pub fn place(&self, request: OrderRequest) -> Result<Order, String> {
        let mut order = Order::new();
        order.set_table_number(request.table);
        order.set_notes(request.notes);

        for line in &request.items {
            let menu_item = self
                .catalog
                .item(&line.code)
                .ok_or_else(|| format!("Unknown menu item code: {}", line.code))?;
            order.add_item(menu_item.clone(), line.quantity);
        }

        let order = self.history.record(order);
        self.logger.info(&format!("Order placed: {}", order.summary_line()));
        Ok(order)
    }

    /// Snapshot of recently served orders, newest first.
    pub fn recent_orders(&self) -> Vec<Order> {
        self.history.recent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::messages::OrderLineRequest;
    use logging::{LogLevel, Logger};
    use tempfile::tempdir;

    fn usecase() -> (OrderUseCase, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let logger = Logger::new(&dir.path().join("test.log"), LogLevel::Debug, false).unwrap();
        let usecase = OrderUseCase::new(
            Arc::new(MenuCatalog::load()),
            OrderHistory::new(12),
            logger,
        );
        (usecase, dir)
    }

    fn request(lines: Vec<(&str, u32)>) -> OrderRequest {
        OrderRequest {
            table: "4".to_string(),
            notes: String::new(),
            items: lines
                .into_iter()
                .map(|(code, quantity)| OrderLineRequest {
                    code: code.to_string(),
                    quantity,
                })
                .collect(),
        }
    }

    #[test]
    fn test_place_order_resolves_items() {
        let (usecase, _dir) = usecase();
        let order = usecase
            .place(request(vec![("MNS-01", 2), ("BEV-03", 1)]))
            .unwrap();

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.subtotal(), 34.5);
        assert_eq!(usecase.recent_orders().len(), 1);
    }

    #[test]
    fn test_place_order_rejects_unknown_code() {
        let (usecase, _dir) = usecase();
        let err = usecase
            .place(request(vec![("MNS-01", 1), ("XXX-99", 1)]))
            .unwrap_err();

        assert_eq!(err, "Unknown menu item code: XXX-99");
        assert!(usecase.recent_orders().is_empty());
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let (usecase, _dir) = usecase();
        usecase.place(request(vec![("BEV-01", 1)])).unwrap();
        let second = usecase.place(request(vec![("BEV-02", 1)])).unwrap();

        let recent = usecase.recent_orders();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id(), second.id());
    }
}

//! Per-connection request routing.

use std::io;
use std::net::TcpStream;
use std::sync::Arc;

use json_codec::{JsonObject, JsonValue, parse_object};

use crate::application::usecases::OrderUseCase;
use crate::http::messages::json_helpers::{insert_string, insert_value};
use crate::http::messages::{OrderRequest, menu_payload, order_summary};
use crate::http::protocol::{self, HttpError};
use crate::http::static_files::StaticFiles;
use crate::infrastructure::MenuCatalog;

/// Routes one connection's request to the menu, order, or static file
/// endpoints.
pub struct RequestHandler {
    orders: OrderUseCase,
    catalog: Arc<MenuCatalog>,
    static_files: StaticFiles,
    logger: logging::Logger,
}

impl RequestHandler {
    pub fn new(
        orders: OrderUseCase,
        catalog: Arc<MenuCatalog>,
        static_files: StaticFiles,
        logger: logging::Logger,
    ) -> Self {
        RequestHandler {
            orders,
            catalog,
            static_files,
            logger,
        }
    }

    pub fn handle(&self, mut stream: TcpStream) -> io::Result<()> {
        let request = match protocol::read_request(&mut stream) {
            Ok(request) => request,
            Err(HttpError::Io(e)) => return Err(e),
            Err(err) => {
                self.logger.warn(&format!("rejected request: {}", err));
                return protocol::write_text(&mut stream, 400, &err.to_string());
            }
        };

        // The query string plays no part in routing.
        let path = request
            .path
            .split('?')
            .next()
            .unwrap_or(request.path.as_str())
            .to_string();
        self.logger.debug(&format!("{} {}", request.method, path));

        match (request.method.as_str(), path.as_str()) {
            ("GET", "/api/menu") => self.handle_menu(&mut stream),
            ("GET", "/api/orders") => self.handle_list(&mut stream),
            ("POST", "/api/orders") => self.handle_create(&mut stream, &request.body),
            (_, "/api/menu") | (_, "/api/orders") => {
                protocol::write_text(&mut stream, 405, "Method Not Allowed")
            }
            (_, api_path) if api_path.starts_with("/api/") => {
                protocol::write_text(&mut stream, 404, "Endpoint not found")
            }
            _ => self.static_files.serve(&mut stream, &path),
        }
    }

    fn handle_menu(&self, stream: &mut TcpStream) -> io::Result<()> {
        protocol::write_json(stream, 200, &menu_payload(&self.catalog))
    }

    fn handle_list(&self, stream: &mut TcpStream) -> io::Result<()> {
        let summaries: Vec<JsonValue> = self
            .orders
            .recent_orders()
            .iter()
            .map(order_summary)
            .collect();

        let mut payload = JsonObject::new();
        insert_value(&mut payload, "orders", JsonValue::Array(summaries));
        protocol::write_json(stream, 200, &JsonValue::Object(payload))
    }

    fn handle_create(&self, stream: &mut TcpStream, body: &str) -> io::Result<()> {
        let payload = match parse_object(body) {
            Ok(payload) => payload,
            Err(err) => {
                return protocol::write_text(stream, 400, &format!("Invalid JSON: {}", err));
            }
        };

        let request = match OrderRequest::from_payload(&payload) {
            Ok(request) => request,
            Err(msg) => return protocol::write_text(stream, 400, &msg),
        };

        match self.orders.place(request) {
            Ok(order) => {
                let mut reply = JsonObject::new();
                insert_string(&mut reply, "message", "Order received");
                insert_value(&mut reply, "order", order_summary(&order));
                protocol::write_json(stream, 201, &JsonValue::Object(reply))
            }
            Err(msg) => protocol::write_text(stream, 400, &msg),
        }
    }
}

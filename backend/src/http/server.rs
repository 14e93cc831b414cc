//! HTTP server accept loop, one thread per connection.

use std::io;
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

use crate::application::usecases::OrderUseCase;
use crate::http::handler::RequestHandler;
use crate::http::static_files::StaticFiles;
use crate::infrastructure::MenuCatalog;

/// HTTP server serving the JSON API and the web UI.
pub struct HttpServer {
    orders: OrderUseCase,
    catalog: Arc<MenuCatalog>,
    web_root: String,
    logger: logging::Logger,
}

impl HttpServer {
    pub fn new(
        orders: OrderUseCase,
        catalog: Arc<MenuCatalog>,
        web_root: String,
        logger: logging::Logger,
    ) -> Self {
        HttpServer {
            orders,
            catalog,
            web_root,
            logger,
        }
    }

    /// Binds and serves forever. Each accepted connection is handled on
    /// its own thread; requests are independent, so no coordination is
    /// needed beyond the shared order history.
    pub fn start(&self, bind_addr: &str) -> io::Result<()> {
        let listener = TcpListener::bind(bind_addr)?;
        self.logger
            .info(&format!("HTTP server listening on {}", bind_addr));

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let handler = RequestHandler::new(
                        self.orders.clone(),
                        self.catalog.clone(),
                        StaticFiles::new(self.web_root.clone()),
                        self.logger.scoped("Handler"),
                    );
                    let logger = self.logger.scoped("Handler");

                    thread::spawn(move || {
                        if let Err(e) = handler.handle(stream) {
                            logger.error(&format!("request handling failed: {}", e));
                        }
                    });
                }
                Err(e) => {
                    self.logger
                        .error(&format!("failed to accept connection: {}", e));
                }
            }
        }

        Ok(())
    }
}

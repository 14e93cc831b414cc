use std::path::PathBuf;
use std::sync::Arc;

use dinetab_server::application::usecases::OrderUseCase;
use dinetab_server::config::PosConfig;
use dinetab_server::http::HttpServer;
use dinetab_server::infrastructure::{MenuCatalog, OrderHistory};

fn main() {
    println!("dinetab Server - Starting...");

    // Load configuration
    let config = load_config();

    // Initialize logger
    let logger = initialize_logger(&config);

    logger.info("dinetab server starting...");

    // Build the menu and the shared order history
    let catalog = Arc::new(MenuCatalog::load());
    logger.info(&format!("Menu loaded: {} items", catalog.item_count()));

    let history = OrderHistory::new(config.server.history_limit);

    // Run HTTP server
    run_http_server(&config, catalog, history, logger);
}

/// Initializes the main logger from configuration
fn initialize_logger(config: &PosConfig) -> logging::Logger {
    let log_level = config
        .logging
        .log_level
        .parse()
        .unwrap_or(logging::LogLevel::Info);
    let log_path = PathBuf::from(&config.logging.log_file_path);

    match logging::Logger::new(&log_path, log_level, config.logging.enable_console) {
        Ok(logger) => {
            println!(
                "Logging initialized: {} (level: {})",
                config.logging.log_file_path, config.logging.log_level
            );
            logger
        }
        Err(e) => {
            eprintln!("Failed to create logger: {}", e);
            eprintln!("Cannot continue without logging system.");
            std::process::exit(1);
        }
    }
}

/// Loads configuration from file or returns default values
fn load_config() -> PosConfig {
    // Determine the configuration source in this order:
    // 1. CONFIG environment variable as inline JSON
    // 2. First command-line argument as a path
    // 3. Default to "server_config.json"
    if let Ok(json_str) = std::env::var("CONFIG") {
        match json_codec::from_str::<PosConfig>(&json_str) {
            Ok(cfg) => {
                println!("Configuration loaded from CONFIG env as JSON string");
                return cfg;
            }
            Err(e) => {
                eprintln!("CONFIG env is not valid JSON: {}", e);
            }
        }
    }

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "server_config.json".to_string());

    match PosConfig::load_from_file(&config_path) {
        Ok(c) => {
            println!("Configuration loaded from: {}", config_path);
            c
        }
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", config_path, e);
            eprintln!("Using default values...");
            PosConfig::default()
        }
    }
}

/// Runs the HTTP server (blocking)
fn run_http_server(
    config: &PosConfig,
    catalog: Arc<MenuCatalog>,
    history: OrderHistory,
    main_logger: logging::Logger,
) {
    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);

    let orders = OrderUseCase::new(catalog.clone(), history, main_logger.scoped("Orders"));
    let server = HttpServer::new(
        orders,
        catalog,
        config.server.web_root.clone(),
        main_logger.scoped("HTTP"),
    );

    println!("Web server running at http://{}", bind_addr);
    if let Err(e) = server.start(&bind_addr) {
        main_logger.error(&format!("HTTP server error: {}", e));
        std::process::exit(1);
    }
}

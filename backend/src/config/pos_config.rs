use json_codec::{from_str, impl_json};
use std::error::Error;

use crate::config::{LoggingConfig, ServerConfig};

/// Top-level dinetab server configuration
#[derive(Debug, Clone, Default)]
pub struct PosConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl_json! {
    PosConfig {
        server: ServerConfig,
        logging: LoggingConfig,
    }
}

impl PosConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn Error>> {
        let content = config_loader::load_config_file(path)?;
        from_str(&content).map_err(|e| e.into())
    }
}

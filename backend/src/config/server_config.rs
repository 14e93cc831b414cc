use json_codec::impl_json;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u32,
    pub web_root: String,
    pub history_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            web_root: "web".to_string(),
            history_limit: 12,
        }
    }
}

impl_json! {
    ServerConfig {
        bind_address: String,
        port: u32,
        web_root: String,
        history_limit: usize,
    }
}

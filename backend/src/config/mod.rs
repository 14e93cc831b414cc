//! Server configuration

pub mod logging_config;
pub mod pos_config;
pub mod server_config;

pub use logging_config::LoggingConfig;
pub use pos_config::PosConfig;
pub use server_config::ServerConfig;

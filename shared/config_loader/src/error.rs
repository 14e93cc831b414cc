use std::fmt;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while locating or reading configuration files.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file was not found.
    FileNotFound(String),

    /// The file exists but could not be read.
    ReadError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "failed to read configuration file: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//! # Config Loader
//!
//! A small library for locating and reading configuration files from disk.
//! It does not parse anything: the consumer decides the format (the
//! dinetab server feeds the content to `json_codec`).
//!
//! ```no_run
//! use config_loader::{find_config_file, load_config_file};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Option 1: search the usual locations
//!     let path = find_config_file("server_config.json")?;
//!     let content = load_config_file(&path)?;
//!
//!     // Option 2: explicit path
//!     let content = load_config_file("./config/server_config.json")?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a configuration file and returns its content as a string.
///
/// No parsing or validation happens here; that is the consumer's job.
///
/// # Errors
///
/// [`ConfigError::FileNotFound`] if the path does not exist,
/// [`ConfigError::ReadError`] if it exists but cannot be read.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Searches for a configuration file in the usual locations.
///
/// Checks, in order:
/// 1. the `CONFIG_PATH` environment variable, if set
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var("CONFIG_PATH") {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    let config_dir = PathBuf::from("./config").join(filename);
    if config_dir.exists() {
        return Ok(config_dir);
    }

    let current_dir = PathBuf::from("./").join(filename);
    if current_dir.exists() {
        return Ok(current_dir);
    }

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found; searched CONFIG_PATH, ./config/{}, ./{}",
        filename, filename, filename
    )))
}

/// Finds and loads a configuration file in one step.
pub fn find_and_load(filename: &str) -> Result<String> {
    let path = find_config_file(filename)?;
    load_config_file(path)
}

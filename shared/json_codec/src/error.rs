//! Error types for JSON codec operations.

/// Result type for JSON codec operations.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Error type for JSON codec failures.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonError {
    /// Syntax violation detected while parsing. The message describes the
    /// expected versus found token.
    Malformed(String),
    /// The top-level value was required to be an object but was not.
    NotAnObject,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonError::Malformed(msg) => write!(f, "malformed JSON: {}", msg),
            JsonError::NotAnObject => write!(f, "JSON payload is not an object"),
        }
    }
}

impl std::error::Error for JsonError {}

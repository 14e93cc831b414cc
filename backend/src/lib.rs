//! dinetab Server Library
//!
//! Core library exposing the domain model, infrastructure, and HTTP layer
//! for integration testing.

pub mod application;
pub mod config;
pub mod domain;
pub mod http;
pub mod infrastructure;

// Re-export commonly used types for integration tests
pub use domain::{MenuItem, Order, OrderItem, OrderStatus};
pub use infrastructure::{MenuCatalog, OrderHistory};

//! Use cases - Business logic operations
pub mod order_usecase;

pub use order_usecase::OrderUseCase;

//! Application layer - business logic operations

pub mod usecases;

//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_link.rs` for the PostgreSQL
//! implementation.

pub mod link_repository;
pub mod store_error;

pub use link_repository::LinkRepository;
pub use store_error::StoreError;

#[cfg(test)]
pub use link_repository::MockLinkRepository;

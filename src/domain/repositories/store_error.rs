//! Errors surfaced by link store implementations.

use thiserror::Error;

/// Failure of a store operation.
///
/// The store's native uniqueness signal is always reported as
/// [`StoreError::DuplicateCode`], never as a generic query failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("short code already exists: {0}")]
    DuplicateCode(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store query failed: {0}")]
    Query(String),
}

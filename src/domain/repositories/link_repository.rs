//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface over the `links` relation.
///
/// Lookups that find nothing return `Ok(None)`; it is up to the caller to
/// turn that into a not-found error.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `total_clicks = 0` and a store-assigned
    /// `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the code is already taken.
    /// Returns [`StoreError::Unavailable`] if the store cannot be reached.
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Lists every link, most recently created first.
    async fn list(&self) -> Result<Vec<Link>, StoreError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Permanently removes a link and returns the removed record.
    ///
    /// Returns `Ok(None)` if no link has this code.
    async fn delete_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Atomically increments `total_clicks`, sets `last_clicked` to now and
    /// returns the link's `target_url`.
    ///
    /// Implementations must perform this as one read-modify-write against the
    /// store so that concurrent redirects never lose an increment.
    ///
    /// Returns `Ok(None)` if no link has this code.
    async fn increment_click(&self, code: &str) -> Result<Option<String>, StoreError>;
}

//! Link creation, lookup, deletion and click recording.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code};
use crate::utils::url_validator::is_valid_target_url;

/// Service for managing short links.
///
/// Each operation validates its input and then makes exactly one repository
/// call. Validation failures never reach the store.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - The destination URL (must be absolute `http`/`https`)
    /// - `code` - Optional custom short code. `None` or an empty string means
    ///   a 6-character code is generated.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the URL is rejected
    /// - [`AppError::InvalidCode`] if a supplied code is rejected
    /// - [`AppError::DuplicateCode`] if the code is already taken; generated
    ///   codes are not retried, the caller may simply try again
    /// - [`AppError::StoreUnavailable`] / [`AppError::Internal`] on store failures
    pub async fn create_link(
        &self,
        target_url: String,
        code: Option<String>,
    ) -> Result<Link, AppError> {
        if !is_valid_target_url(&target_url) {
            return Err(AppError::InvalidUrl);
        }

        let code = match code.filter(|c| !c.is_empty()) {
            Some(custom) if is_valid_code(&custom) => custom,
            Some(_) => return Err(AppError::InvalidCode),
            None => generate_code(),
        };

        let link = self
            .link_repository
            .create(NewLink { code, target_url })
            .await?;

        tracing::info!(code = %link.code, target_url = %link.target_url, "Link created");

        Ok(link)
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.link_repository.list().await?)
    }

    /// Returns a link with its click statistics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link_stats(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))
    }

    /// Permanently deletes a link and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code, including
    /// when it was already deleted.
    pub async fn delete_link(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .delete_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))?;

        tracing::info!(code = %link.code, total_clicks = link.total_clicks, "Link deleted");

        Ok(link)
    }

    /// Records a click on `code` and returns the URL to redirect to.
    ///
    /// The increment and the lookup happen in one atomic store operation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve_and_record_click(&self, code: &str) -> Result<String, AppError> {
        let target_url = self
            .link_repository
            .increment_click(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))?;

        tracing::debug!(code, "Click recorded");

        Ok(target_url)
    }

    /// Builds the public short URL for `code` under `base_url`.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}

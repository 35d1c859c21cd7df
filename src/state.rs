//! Shared application state injected into all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Link service over whichever store backend was configured.
pub type DynLinkService = LinkService<dyn LinkRepository>;

/// Application state shared across handlers.
///
/// Cheap to clone: every field is reference-counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    /// Public origin used to render short URLs, e.g. `https://tiny.example`.
    pub base_url: Arc<str>,
    /// Process start, reported as uptime by the health check.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            base_url: base_url.into(),
            started_at: Instant::now(),
        }
    }

    /// Public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        self.link_service.short_url(&self.base_url, code)
    }
}

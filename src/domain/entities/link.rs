//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counters.
///
/// `code` and `target_url` never change after creation. `total_clicks` and
/// `last_clicked` are only touched by the redirect path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        target_url: String,
        total_clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            target_url,
            total_clicks,
            last_clicked,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
        }
    }
}

//! Display-ready link data shared by the dashboard templates.

use chrono::{DateTime, Utc};

use crate::domain::entities::Link;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// A link with its fields pre-formatted for HTML rendering.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub total_clicks: i64,
    pub last_clicked: String,
    pub created_at: String,
}

impl LinkView {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            short_url,
            total_clicks: link.total_clicks,
            last_clicked: link
                .last_clicked
                .map(format_timestamp)
                .unwrap_or_else(|| "Never".to_string()),
            created_at: format_timestamp(link.created_at),
        }
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Case-insensitive substring match on code or target URL.
///
/// An empty query matches everything.
pub fn matches_search(link: &Link, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    link.code.to_lowercase().contains(&query) || link.target_url.to_lowercase().contains(&query)
}

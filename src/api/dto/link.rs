//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// A missing, `null` or non-string `target_url` deserializes to an empty
/// string and is rejected by URL validation, so the client sees
/// `Invalid URL` rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub target_url: String,

    /// Optional custom short code; empty means "generate one".
    #[serde(default)]
    pub code: Option<String>,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrAny {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match StringOrAny::deserialize(deserializer)? {
        StringOrAny::Text(s) => s,
        StringOrAny::Other(_) => String::new(),
    })
}

/// JSON representation of a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Confirmation returned after a delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

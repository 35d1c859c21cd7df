//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;

use super::view::{LinkView, matches_search};
use crate::error::AppError;
use crate::state::AppState;

/// Query string accepted by the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Filter on code or target URL.
    #[serde(default)]
    pub q: String,
}

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with:
/// - Link creation form
/// - Searchable link table with delete actions
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub links: Vec<LinkView>,
    pub total: usize,
    pub query: String,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /dashboard?q=<search>`
///
/// Creation and deletion are done by `static/dashboard.js` through the JSON
/// API, after which the page reloads.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> Result<DashboardTemplate, AppError> {
    let links = state.link_service.list_links().await?;
    let total = links.len();

    let links = links
        .into_iter()
        .filter(|link| matches_search(link, &params.q))
        .map(|link| {
            let short_url = state.short_url(&link.code);
            LinkView::new(link, short_url)
        })
        .collect();

    Ok(DashboardTemplate {
        links,
        total,
        query: params.q,
    })
}

//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::view::LinkView;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the link statistics page.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub link: LinkView,
}

/// Rendered when the requested code does not exist.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /dashboard/code/{code}`
///
/// Returns a 404 page when the code does not exist. Viewing this page does
/// not count as a click.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.get_link_stats(&code).await {
        Ok(link) => {
            let short_url = state.short_url(&link.code);
            Ok(StatsTemplate {
                link: LinkView::new(link, short_url),
            }
            .into_response())
        }
        Err(AppError::NotFound(_)) => {
            Ok((StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response())
        }
        Err(e) => Err(e),
    }
}

//! Handlers for link management endpoints (create, list, get, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, LinkResponse, MessageResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "target_url": "https://example.com", "code": "mycode1" }
/// ```
///
/// `code` is optional; when omitted or empty a 6-character code is generated.
///
/// # Response Codes
///
/// - **201 Created**: the created link
/// - **400 Bad Request**: invalid URL or code
/// - **409 Conflict**: code already exists
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;

    let link = state
        .link_service
        .create_link(payload.target_url, payload.code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single link with its click statistics.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link_stats(&code).await?;

    Ok(Json(link.into()))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// Subsequent lookups and redirects for this code return 404.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist or was already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(MessageResponse {
        message: "Link deleted successfully",
    }))
}

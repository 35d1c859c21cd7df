//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL and records the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically increment the click counter and fetch the target URL
/// 2. Return 302 Found with `Location: <target_url>`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state.link_service.resolve_and_record_click(&code).await?;

    let location = HeaderValue::from_str(&target_url).map_err(|e| {
        AppError::Internal(format!("stored URL for {code} is not a valid header: {e}"))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

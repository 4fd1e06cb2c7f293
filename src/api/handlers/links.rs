//! Handlers for link creation and listing.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, creating a record on first submission.
///
/// # Endpoint
///
/// `POST /links` (session required)
///
/// # Idempotence
///
/// Submitting a URL that was already shortened returns the existing code;
/// no duplicate row is created.
///
/// # Errors
///
/// Returns 404 when the submitted URL is not a well-formed absolute http(s)
/// URL.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(payload.url).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(LinkResponse::from_link(link, short_url)))
}

/// Lists every stored link in insertion order.
///
/// # Endpoint
///
/// `GET /links` (session required)
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    let responses = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.code);
            LinkResponse::from_link(link, short_url)
        })
        .collect();

    Ok(Json(responses))
}

//! DTOs for link creation and listing.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// Syntactic URL validation happens in the service layer so that a malformed
/// URL maps to the not-found convention rather than a generic 400.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 8192, message = "url must not be empty"))]
    pub url: String,
}

/// A stored link as returned to clients.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub url: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub short_url: String,
}

impl LinkResponse {
    /// Builds the response shape from a stored link and its composed short
    /// URL.
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            url: link.url,
            code: link.code,
            title: link.title,
            short_url,
        }
    }
}

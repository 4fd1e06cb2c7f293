//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use crate::utils::title_fetcher::HttpTitleFetcher;

/// Application state shared across all request handlers.
///
/// Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository, HttpTitleFetcher>>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<PgLinkRepository, HttpTitleFetcher>>,
        auth_service: Arc<AuthService<PgUserRepository>>,
    ) -> Self {
        Self {
            link_service,
            auth_service,
        }
    }
}

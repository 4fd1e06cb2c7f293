//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};
use crate::utils::title_fetcher::TitleFetcher;
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Service for shortening URLs and resolving short codes.
///
/// Creation is idempotent per URL: submitting a URL that is already stored
/// returns the existing record. Uniqueness races are resolved against the
/// store's constraints, never by in-process locking.
pub struct LinkService<L: LinkRepository, T: TitleFetcher> {
    link_repository: Arc<L>,
    title_fetcher: Arc<T>,
    base_url: String,
}

impl<L: LinkRepository, T: TitleFetcher> LinkService<L, T> {
    /// Creates a new link service.
    ///
    /// `base_url` is the host prefix stored with each link and used to
    /// compose the displayed short URL.
    pub fn new(link_repository: Arc<L>, title_fetcher: Arc<T>, base_url: String) -> Self {
        Self {
            link_repository,
            title_fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the link for `url`, creating a record if none exists.
    ///
    /// # Idempotence
    ///
    /// A URL that has been shortened before returns its existing link; no
    /// second row and no second code are ever created for the same URL.
    ///
    /// # Code Generation
    ///
    /// Codes are derived from the URL and retried with a counter on
    /// collision, up to 10 attempts. Reserved route names count as
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] for anything that is not an absolute
    /// http(s) URL; the store is not touched in that case.
    /// Returns [`AppError::Storage`] when the store fails, or when every
    /// generation attempt collides.
    pub async fn shorten(&self, url: String) -> Result<Link, AppError> {
        validate_url(&url).map_err(|e| {
            AppError::invalid_url("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing_link) = self.link_repository.find_by_url(&url).await? {
            return Ok(existing_link);
        }

        // Only fetched for genuinely new links; a failure leaves title NULL.
        let title = self.title_fetcher.fetch_title(&url).await;

        self.create_with_retries(url, title).await
    }

    /// Resolves a short code to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unassigned code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists every stored link in insertion order.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Composes the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Inserts a new link, retrying code generation on collision.
    ///
    /// A uniqueness conflict is disambiguated by re-reading the store: if the
    /// URL is now present, a concurrent create for the same URL won the race
    /// and its record is returned; otherwise the generated code collided with
    /// another URL and the next attempt is tried.
    async fn create_with_retries(
        &self,
        url: String,
        title: Option<String>,
    ) -> Result<Link, AppError> {
        const MAX_ATTEMPTS: u32 = 10;

        for attempt in 0..MAX_ATTEMPTS {
            let code = generate_code(&url, attempt);
            if is_reserved(&code) {
                continue;
            }

            let new_link = NewLink {
                url: url.clone(),
                code,
                title: title.clone(),
                base_url: Some(self.base_url.clone()),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    if let Some(existing_link) = self.link_repository.find_by_url(&url).await? {
                        return Ok(existing_link);
                    }
                    // Code collided with a different URL; try the next candidate.
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::storage(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

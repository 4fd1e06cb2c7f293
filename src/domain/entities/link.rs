//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// Maps a short code to the long URL it resolves to. `title` is fetched
/// best-effort when the link is created and stays `None` when the page could
/// not be read. `base_url` is the host prefix the full short link is
/// composed with.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub code: String,
    pub title: Option<String>,
    pub base_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub url: String,
    pub code: String,
    pub title: Option<String>,
    pub base_url: Option<String>,
}

//! Best-effort page title fetching for newly created links.

use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Matches the first `<title>` element, across lines, case-insensitively.
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));

/// Cap on how much of the response body is scanned for a title.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Default timeout for the title request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Retrieves a page title for a URL.
///
/// Title fetching must never block or fail link creation, so the contract
/// has no error channel: every failure collapses to `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleFetcher: Send + Sync {
    async fn fetch_title(&self, url: &str) -> Option<String>;
}

/// [`TitleFetcher`] that issues a real HTTP GET with a bounded timeout.
pub struct HttpTitleFetcher {
    client: reqwest::Client,
}

impl HttpTitleFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

impl Default for HttpTitleFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_TIMEOUT)
    }
}

#[async_trait]
impl TitleFetcher for HttpTitleFetcher {
    async fn fetch_title(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url, error = %e, "title fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(url, status = %response.status(), "title fetch got non-success status");
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(url, error = %e, "title fetch could not read body");
                return None;
            }
        };

        let head = if body.len() > MAX_BODY_BYTES {
            let mut end = MAX_BODY_BYTES;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            &body[..end]
        } else {
            body.as_str()
        };

        extract_title(head)
    }
}

/// Extracts the text of the first `<title>` element from an HTML fragment.
///
/// Whitespace is collapsed; an empty or whitespace-only title counts as
/// absent.
pub fn extract_title(html: &str) -> Option<String> {
    let captures = TITLE_REGEX.captures(html)?;
    let raw = captures.get(1)?.as_str();

    let title = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() { None } else { Some(title) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_simple() {
        let html = "<html><head><title>Funny pictures of animals</title></head></html>";
        assert_eq!(
            extract_title(html),
            Some("Funny pictures of animals".to_string())
        );
    }

    #[test]
    fn test_extract_title_with_attributes() {
        let html = r#"<title data-reactid="1">Rust</title>"#;
        assert_eq!(extract_title(html), Some("Rust".to_string()));
    }

    #[test]
    fn test_extract_title_multiline_collapses_whitespace() {
        let html = "<title>\n  Funny pictures of animals,\n  funny dog pictures\n</title>";
        assert_eq!(
            extract_title(html),
            Some("Funny pictures of animals, funny dog pictures".to_string())
        );
    }

    #[test]
    fn test_extract_title_case_insensitive() {
        let html = "<TITLE>Shouting</TITLE>";
        assert_eq!(extract_title(html), Some("Shouting".to_string()));
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(
            extract_title("<html><body>no title here</body></html>"),
            None
        );
    }

    #[test]
    fn test_extract_title_empty() {
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    #[test]
    fn test_extract_title_takes_first() {
        let html = "<title>first</title><title>second</title>";
        assert_eq!(extract_title(html), Some("first".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_title_unreachable_host_is_none() {
        let fetcher = HttpTitleFetcher::new(Duration::from_millis(200));
        // TEST-NET-1 address, nothing listens there.
        let title = fetcher.fetch_title("http://192.0.2.1/").await;
        assert_eq!(title, None);
    }
}

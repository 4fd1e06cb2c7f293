#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use shortly::application::services::{AuthService, LinkService};
use shortly::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use shortly::infrastructure::session::MemorySessionStore;
use shortly::state::AppState;
use shortly::utils::password_hash::hash_password;
use shortly::utils::title_fetcher::HttpTitleFetcher;

pub const TEST_BASE_URL: &str = "http://127.0.0.1:4568";

/// Builds an [`AppState`] over a test database pool.
///
/// The title fetcher gets a short timeout so create-link tests are not
/// delayed when the submitted host is unreachable.
pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool));

    let sessions = Arc::new(MemorySessionStore::new(Duration::from_secs(3600)));
    let title_fetcher = Arc::new(HttpTitleFetcher::new(Duration::from_millis(200)));

    let link_service = Arc::new(LinkService::new(
        link_repo,
        title_fetcher,
        TEST_BASE_URL.to_string(),
    ));
    let auth_service = Arc::new(AuthService::new(user_repo, sessions));

    AppState::new(link_service, auth_service)
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (url, code, base_url) VALUES ($1, $2, $3)")
        .bind(url)
        .bind(code)
        .bind(TEST_BASE_URL)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_link_with_title(pool: &PgPool, code: &str, url: &str, title: &str) {
    sqlx::query("INSERT INTO urls (url, code, title, base_url) VALUES ($1, $2, $3, $4)")
        .bind(url)
        .bind(code)
        .bind(title)
        .bind(TEST_BASE_URL)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a user with a properly hashed password.
pub async fn create_test_user(pool: &PgPool, name: &str, plaintext: &str) {
    sqlx::query("INSERT INTO users (name, password) VALUES ($1, $2)")
        .bind(name)
        .bind(hash_password(plaintext))
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links_for_url(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE url = $1")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn stored_password(pool: &PgPool, name: &str) -> String {
    sqlx::query_scalar("SELECT password FROM users WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Extracts the session token from a response's `Set-Cookie` header.
pub fn session_token(response: &axum_test::TestResponse) -> String {
    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();

    let pair = set_cookie.split(';').next().unwrap();
    pair.strip_prefix("session_token=")
        .expect("set-cookie should carry the session token")
        .to_string()
}

/// Formats a `Cookie` header value for an authenticated request.
pub fn cookie_header(token: &str) -> String {
    format!("session_token={}", token)
}

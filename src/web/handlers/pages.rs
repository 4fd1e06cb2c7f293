//! HTML page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the link creation page.
///
/// Renders `templates/index.html`: the shorten form plus the list of
/// existing links, fetched by the page script from `GET /links`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {}

/// Template for the login page.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Template for the signup page.
#[derive(Template, WebTemplate)]
#[template(path = "signup.html")]
struct SignupTemplate {}

/// Renders the main page with the shorten form and link list.
///
/// # Endpoints
///
/// `GET /` and `GET /create` (session required) — both show the create view.
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login` (public)
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {}
}

/// Renders the signup page.
///
/// # Endpoint
///
/// `GET /signup` (public)
pub async fn signup_page_handler() -> impl IntoResponse {
    SignupTemplate {}
}

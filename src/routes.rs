//! Application router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Create page (session required)
//! - `GET  /create`      - Create page, same view (session required)
//! - `GET  /links`       - List all links as JSON (session required)
//! - `POST /links`       - Shorten a URL (session required)
//! - `GET  /login`       - Login page
//! - `POST /login`       - Log in
//! - `GET  /signup`      - Signup page
//! - `POST /signup`      - Create an account
//! - `GET/POST /logout`  - Destroy the session
//! - `GET  /{code}`      - Short link redirect (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Session auth** - Cookie session gate on protected routes, redirecting
//!   unauthenticated callers to `/login`
//! - **Path normalization** - Trailing slash handling
//!
//! The `/{code}` catch-all is registered alongside explicit routes; Axum
//! prefers the more specific path, and generated codes never collide with
//! route names (see [`crate::utils::code_generator::RESERVED_CODES`]).

use crate::api::handlers::{
    create_link_handler, list_links_handler, login_handler, logout_handler, redirect_handler,
    signup_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::{index_handler, login_page_handler, signup_page_handler};
use crate::web::middleware::session_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = Router::new()
        .route("/", get(index_handler))
        .route("/create", get(index_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_auth::layer,
        ));

    let public = Router::new()
        .route("/signup", get(signup_page_handler).post(signup_handler))
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/logout", get(logout_handler).post(logout_handler))
        .route("/{code}", get(redirect_handler));

    let router = Router::new()
        .merge(protected)
        .merge(public)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

//! Cookie-session authentication middleware for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::utils::session_cookie::session_token_from_headers;

/// Gates protected routes behind a live session.
///
/// # Authentication Flow
///
/// 1. Extract the `session_token` cookie from the request
/// 2. Resolve it via [`crate::application::services::AuthService`]
/// 3. On success, continue to the handler
/// 4. On a missing, unknown, or expired token, redirect to `/login`
///
/// The redirect (rather than a bare 401) keeps the browser flow usable:
/// an unauthenticated visit to any protected page lands on the login page.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = session_token_from_headers(req.headers());

    match token {
        Some(token) => match st.auth_service.authenticate(&token).await {
            Ok(_) => Ok(next.run(req).await),
            Err(_) => Err(Redirect::to("/login")),
        },
        None => Err(Redirect::to("/login")),
    }
}

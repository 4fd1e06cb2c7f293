//! Handlers for signup, login, and logout.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect},
};
use validator::Validate;

use crate::api::dto::{LoginRequest, SignupRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::session_cookie::{clear_session_cookie, session_cookie, session_token_from_headers};

/// Creates a user account and logs the caller in.
///
/// # Endpoint
///
/// `POST /signup` (public)
///
/// # Responses
///
/// - Success: session cookie set, redirect to `/`
/// - Name already taken: `418 I'm a teapot`, no record created
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let session = state
        .auth_service
        .signup(payload.name, payload.password)
        .await?;

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&session.token))]),
        Redirect::to("/"),
    ))
}

/// Logs an existing user in.
///
/// # Endpoint
///
/// `POST /login` (public)
///
/// # Responses
///
/// - Success: session cookie set, redirect to `/`
/// - Unknown name or wrong password: redirect back to `/login`, with no
///   detail distinguishing the two
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let session = state
        .auth_service
        .login(&payload.name, &payload.password)
        .await?;

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&session.token))]),
        Redirect::to("/"),
    ))
}

/// Destroys the caller's session.
///
/// # Endpoint
///
/// `GET /logout`, `POST /logout` (public)
///
/// Always clears the cookie and redirects to `/login`; logging out without
/// a session is not an error.
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token_from_headers(&headers) {
        state.auth_service.logout(&token).await;
    }

    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Redirect::to("/login"),
    )
}

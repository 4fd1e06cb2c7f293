//! Session model for cookie-based authentication.

use std::time::{Duration, SystemTime};

/// An authenticated session.
///
/// Sessions live only in process memory; they are created at login/signup,
/// destroyed at logout, and expire after their TTL elapses.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque session token carried in the `session_token` cookie.
    pub token: String,
    /// Name of the authenticated user.
    pub user_name: String,
    pub created_at: SystemTime,
    pub expires_in: Duration,
}

impl Session {
    pub fn new(token: String, user_name: String, expires_in: Duration) -> Self {
        Self {
            token,
            user_name,
            created_at: SystemTime::now(),
            expires_in,
        }
    }

    /// Returns true once the session TTL has elapsed.
    ///
    /// A clock that moved backwards counts as expired.
    pub fn is_expired(&self) -> bool {
        self.created_at
            .elapsed()
            .map(|elapsed| elapsed > self.expires_in)
            .unwrap_or(true)
    }
}

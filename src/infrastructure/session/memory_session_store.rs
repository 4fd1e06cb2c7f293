//! In-memory session storage.

use base64::Engine as _;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::Session;

/// Random bytes per session token. 32 bytes encode to 43 base64 characters.
const TOKEN_LENGTH_BYTES: usize = 32;

/// Process-local session store.
///
/// Sessions have no persistence beyond this store: a restart logs everyone
/// out. Expired sessions are dropped lazily on lookup.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl MemorySessionStore {
    /// Creates a store whose sessions expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Creates a session for `user_name` and returns it.
    pub async fn insert(&self, user_name: &str) -> Session {
        let session = Session::new(generate_token(), user_name.to_string(), self.ttl);

        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());

        session
    }

    /// Looks up a live session by token.
    ///
    /// An expired session is removed and reported as absent.
    pub async fn get(&self, token: &str) -> Option<Session> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if !session.is_expired() => return Some(session.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        self.sessions.write().await.remove(token);
        None
    }

    /// Removes a session by token. Removing an unknown token is a no-op.
    pub async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}

/// Generates a URL-safe random session token.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

//! User entity for account management.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `password` holds the stored digest, never the plaintext. See
/// [`crate::utils::password_hash`] for the digest format.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
///
/// `password` must already be hashed by the caller; repositories store it
/// verbatim.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_construction() {
        let user = User {
            id: 7,
            name: "Svnh".to_string(),
            password: "digest".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Svnh");
    }
}

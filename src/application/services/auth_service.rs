//! Account and session management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, Session};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::session::MemorySessionStore;
use crate::utils::password_hash::{hash_password, verify_password};
use serde_json::json;

/// Service for signup, login, logout, and per-request authentication.
///
/// Passwords are stored as one-way digests and checked by re-hashing the
/// submitted plaintext. Login failures carry no detail that would let a
/// caller tell an unknown name from a wrong password.
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    sessions: Arc<MemorySessionStore>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    pub fn new(user_repository: Arc<U>, sessions: Arc<MemorySessionStore>) -> Self {
        Self {
            user_repository,
            sessions,
        }
    }

    /// Registers a new user and logs them in.
    ///
    /// The unique constraint on `users.name` is the collision authority; no
    /// pre-check read races against concurrent signups.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NameTaken`] when the name already exists, leaving
    /// the original record untouched. Returns [`AppError::Storage`] on
    /// database errors.
    pub async fn signup(&self, name: String, password: String) -> Result<Session, AppError> {
        let new_user = NewUser {
            name,
            password: hash_password(&password),
        };

        let user = match self.user_repository.create(new_user).await {
            Ok(user) => user,
            Err(AppError::Conflict { .. }) => {
                return Err(AppError::name_taken("Name already taken", json!({})));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user = %user.name, "user signed up");

        Ok(self.sessions.insert(&user.name).await)
    }

    /// Authenticates a name/password pair and opens a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] for an unknown name or a
    /// wrong password; the two cases are externally indistinguishable.
    pub async fn login(&self, name: &str, password: &str) -> Result<Session, AppError> {
        let user = self
            .user_repository
            .find_by_name(name)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.password) {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(user = %user.name, "user logged in");

        Ok(self.sessions.insert(&user.name).await)
    }

    /// Destroys the session for `token`.
    ///
    /// Idempotent: logging out an unknown or already-destroyed token is not
    /// an error.
    pub async fn logout(&self, token: &str) {
        self.sessions.remove(token).await;
    }

    /// Resolves a session token to the authenticated user's name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for a missing or expired session.
    pub async fn authenticate(&self, token: &str) -> Result<String, AppError> {
        self.sessions
            .get(token)
            .await
            .map(|session| session.user_name)
            .ok_or_else(|| AppError::unauthorized("No valid session"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;
    use std::time::Duration;

    fn sessions() -> Arc<MemorySessionStore> {
        Arc::new(MemorySessionStore::new(Duration::from_secs(3600)))
    }

    fn stored_user(name: &str, plaintext: &str) -> User {
        User {
            id: 1,
            name: name.to_string(),
            password: hash_password(plaintext),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_signup_hashes_password() {
        let mut mock = MockUserRepository::new();

        let expected = hash_password("getGUDscrub");
        mock.expect_create()
            .withf(move |new_user| {
                new_user.name == "Patches" && new_user.password == expected
            })
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: 1,
                    name: new_user.name,
                    password: new_user.password,
                    created_at: Utc::now(),
                })
            });

        let service = AuthService::new(Arc::new(mock), sessions());

        let session = service
            .signup("Patches".to_string(), "getGUDscrub".to_string())
            .await
            .unwrap();

        assert_eq!(session.user_name, "Patches");
    }

    #[tokio::test]
    async fn test_signup_establishes_session() {
        let mut mock = MockUserRepository::new();
        mock.expect_create().returning(|new_user| {
            Ok(User {
                id: 1,
                name: new_user.name,
                password: new_user.password,
                created_at: Utc::now(),
            })
        });

        let service = AuthService::new(Arc::new(mock), sessions());

        let session = service
            .signup("Svnh".to_string(), "Svnh".to_string())
            .await
            .unwrap();

        let user = service.authenticate(&session.token).await.unwrap();
        assert_eq!(user, "Svnh");
    }

    #[tokio::test]
    async fn test_signup_name_taken() {
        let mut mock = MockUserRepository::new();
        mock.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::json!({ "constraint": "users_name_key" }),
            ))
        });

        let service = AuthService::new(Arc::new(mock), sessions());

        let result = service
            .signup("Patches".to_string(), "getGUDscrub".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NameTaken { .. }));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut mock = MockUserRepository::new();

        let user = stored_user("Phillip", "Phillip");
        mock.expect_find_by_name()
            .withf(|name| name == "Phillip")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock), sessions());

        let session = service.login("Phillip", "Phillip").await.unwrap();
        assert_eq!(session.user_name, "Phillip");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock = MockUserRepository::new();

        let user = stored_user("Phillip", "Phillip");
        mock.expect_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock), sessions());

        let result = service.login("Phillip", "wrong").await;
        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_user_indistinguishable_from_wrong_password() {
        let mut unknown_repo = MockUserRepository::new();
        unknown_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let user = stored_user("Phillip", "Phillip");
        let mut wrong_pw_repo = MockUserRepository::new();
        wrong_pw_repo
            .expect_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let unknown = AuthService::new(Arc::new(unknown_repo), sessions())
            .login("Fred", "Fred")
            .await
            .unwrap_err();
        let wrong = AuthService::new(Arc::new(wrong_pw_repo), sessions())
            .login("Phillip", "wrong")
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(unknown, AppError::InvalidCredentials));
        assert!(matches!(wrong, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_logout_destroys_session() {
        let mut mock = MockUserRepository::new();

        let user = stored_user("Phillip", "Phillip");
        mock.expect_find_by_name()
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock), sessions());

        let session = service.login("Phillip", "Phillip").await.unwrap();
        service.logout(&session.token).await;

        assert!(service.authenticate(&session.token).await.is_err());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), sessions());

        service.logout("never-existed").await;
        service.logout("never-existed").await;
    }

    #[tokio::test]
    async fn test_authenticate_rejects_unknown_token() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), sessions());

        let result = service.authenticate("bogus").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_expired_session() {
        let mut mock = MockUserRepository::new();

        let user = stored_user("Phillip", "Phillip");
        mock.expect_find_by_name()
            .returning(move |_| Ok(Some(user.clone())));

        let sessions = Arc::new(MemorySessionStore::new(Duration::from_secs(0)));
        let service = AuthService::new(Arc::new(mock), sessions);

        let session = service.login("Phillip", "Phillip").await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert!(service.authenticate(&session.token).await.is_err());
    }
}

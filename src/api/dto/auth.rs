//! DTOs for signup and login.

use serde::Deserialize;
use validator::Validate;

/// Signup payload.
///
/// Accepts `username` as an alias for `name`; clients use both spellings.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(alias = "username")]
    #[validate(length(min = 1, max = 60, message = "name must be 1-60 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Login payload. Same shape and aliasing as signup.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(alias = "username")]
    #[validate(length(min = 1, max = 60, message = "name must be 1-60 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_accepts_name_field() {
        let request: SignupRequest =
            serde_json::from_value(serde_json::json!({ "name": "Svnh", "password": "Svnh" }))
                .unwrap();
        assert_eq!(request.name, "Svnh");
    }

    #[test]
    fn test_signup_accepts_username_alias() {
        let request: SignupRequest = serde_json::from_value(
            serde_json::json!({ "username": "Patches", "password": "getGUDscrub" }),
        )
        .unwrap();
        assert_eq!(request.name, "Patches");
    }

    #[test]
    fn test_login_accepts_username_alias() {
        let request: LoginRequest = serde_json::from_value(
            serde_json::json!({ "username": "Phillip", "password": "Phillip" }),
        )
        .unwrap();
        assert_eq!(request.name, "Phillip");
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let request: SignupRequest =
            serde_json::from_value(serde_json::json!({ "name": "", "password": "pw" })).unwrap();
        assert!(request.validate().is_err());
    }
}

//! Application error taxonomy and HTTP boundary mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON body returned for API-facing errors.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error.
///
/// Variants map one-to-one onto boundary behavior: JSON error responses for
/// API failures, redirects for browser-facing authentication failures.
///
/// Invalid submitted URLs are reported as `404 Not Found` rather than 400:
/// the service treats a URL it refuses to shorten the same way it treats a
/// short code it does not know.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request payload (DTO validation).
    Validation { message: String, details: Value },
    /// Submitted long URL is not a well-formed absolute http(s) URL.
    InvalidUrl { message: String, details: Value },
    /// Unknown short code or missing record.
    NotFound { message: String, details: Value },
    /// Signup collision: the requested user name already exists.
    NameTaken { message: String, details: Value },
    /// Login failure. Carries no detail distinguishing an unknown user from
    /// a wrong password.
    InvalidCredentials,
    /// Missing or invalid session on a protected route.
    Unauthorized { message: String },
    /// Storage uniqueness violation surfaced to a caller that did not
    /// resolve it as an idempotent-create race.
    Conflict { message: String, details: Value },
    /// Database unavailable or failed outside the expected uniqueness races.
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn name_taken(message: impl Into<String>, details: Value) -> Self {
        Self::NameTaken {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message, .. }
            | Self::InvalidUrl { message, .. }
            | Self::NotFound { message, .. }
            | Self::NameTaken { message, .. }
            | Self::Unauthorized { message }
            | Self::Conflict { message, .. }
            | Self::Storage { message, .. } => f.write_str(message),
            Self::InvalidCredentials => f.write_str("Invalid credentials"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Converts the error into its API payload form.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            Self::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            Self::InvalidUrl { message, details } => {
                ("invalid_url", message.clone(), details.clone())
            }
            Self::NotFound { message, details } => ("not_found", message.clone(), details.clone()),
            Self::NameTaken { message, details } => {
                ("name_taken", message.clone(), details.clone())
            }
            Self::InvalidCredentials => ("invalid_credentials", self.to_string(), json!({})),
            Self::Unauthorized { message } => ("unauthorized", message.clone(), json!({})),
            Self::Conflict { message, details } => ("conflict", message.clone(), details.clone()),
            Self::Storage { message, details } => {
                ("storage_error", message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidUrl { .. } | AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::NameTaken { .. } => StatusCode::IM_A_TEAPOT,
            // Browser-facing auth failures redirect instead of rendering an
            // error body, matching the behavior the pages expect.
            AppError::InvalidCredentials | AppError::Unauthorized { .. } => {
                return Redirect::to("/login").into_response();
            }
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if matches!(self, AppError::Storage { .. }) {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a SQLx error into the application taxonomy.
///
/// Unique constraint violations become [`AppError::Conflict`] carrying the
/// constraint name; everything else is a [`AppError::Storage`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    tracing::error!(error = %e, "database error");
    AppError::storage("Database error", json!({}))
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::validation(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}

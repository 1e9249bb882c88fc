//! Error types for golos.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Domain kinds (not-found, already-exists, guard errors) are produced by the
/// repository and service layers; the transport layer maps each kind to an
/// HTTP status via [`IntoResponse`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    // === Not found ===
    #[error("user not found")]
    UserNotFound,

    #[error("election not found")]
    ElectionNotFound,

    #[error("vote variant not found")]
    VoteVariantNotFound,

    #[error("vote not found")]
    VoteNotFound,

    // === Conflicts ===
    #[error("user already exists")]
    UserAlreadyExists,

    #[error("vote variant already exists")]
    VoteVariantAlreadyExists,

    #[error("vote already exists")]
    VoteAlreadyExists,

    // === Guard errors ===
    #[error("nothing to change")]
    NothingToChange,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    // === Server errors ===
    #[error("failed to hash password: {0}")]
    Hashing(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound
            | Self::ElectionNotFound
            | Self::VoteVariantNotFound
            | Self::VoteNotFound => StatusCode::NOT_FOUND,

            Self::UserAlreadyExists | Self::VoteVariantAlreadyExists | Self::VoteAlreadyExists => {
                StatusCode::CONFLICT
            }

            Self::NothingToChange | Self::Validation(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }

            Self::Hashing(_) | Self::Database(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if self.is_server_error() {
            tracing::error!(error = %self, "Server error occurred");
        } else {
            tracing::debug!(error = %self, "Client error occurred");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

// === From implementations ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kinds_map_to_404() {
        for err in [
            AppError::UserNotFound,
            AppError::ElectionNotFound,
            AppError::VoteVariantNotFound,
            AppError::VoteNotFound,
        ] {
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_conflict_kinds_map_to_409() {
        for err in [
            AppError::UserAlreadyExists,
            AppError::VoteVariantAlreadyExists,
            AppError::VoteAlreadyExists,
        ] {
            assert_eq!(err.status_code(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_guard_kinds_map_to_400() {
        assert_eq!(
            AppError::NothingToChange.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("nickname".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("malformed body".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_kinds_map_to_500() {
        for err in [
            AppError::Hashing("salt".into()),
            AppError::Database("connection reset".into()),
            AppError::Config("missing url".into()),
            AppError::Internal("oops".into()),
        ] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(err.is_server_error());
        }
    }

    #[test]
    fn test_client_errors_are_not_server_errors() {
        assert!(!AppError::UserNotFound.is_server_error());
        assert!(!AppError::VoteAlreadyExists.is_server_error());
        assert!(!AppError::NothingToChange.is_server_error());
    }
}

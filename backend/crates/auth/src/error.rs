//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Every variant is terminal for the current call; none is process-fatal.
#[derive(Debug, Error)]
pub enum AuthError {
    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------
    #[error("username already exists")]
    DuplicateUsername,

    #[error("email already exists")]
    DuplicateEmail,

    /// Rejected user name, email or password on registration
    #[error("{0}")]
    InvalidInput(String),

    // ------------------------------------------------------------------
    // Login
    // ------------------------------------------------------------------
    /// Unknown user and wrong password are deliberately indistinguishable
    #[error("invalid username or password")]
    InvalidCredentials,

    // ------------------------------------------------------------------
    // Token validation
    // ------------------------------------------------------------------
    #[error("invalid token format")]
    MalformedToken,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("invalid token encoding")]
    InvalidEncoding,

    #[error("invalid token claims")]
    InvalidClaims,

    #[error("token expired")]
    TokenExpired,

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------
    #[error("user not found")]
    NotFound,

    // ------------------------------------------------------------------
    // Access gate
    // ------------------------------------------------------------------
    #[error("missing authorization header")]
    MissingCredential,

    #[error("invalid authorization format")]
    MalformedAuthorizationHeader,

    // ------------------------------------------------------------------
    // Server side
    // ------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateUsername | AuthError::DuplicateEmail => ErrorKind::Conflict,
            AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::InvalidEncoding
            | AuthError::InvalidClaims
            | AuthError::TokenExpired
            | AuthError::MissingCredential
            | AuthError::MalformedAuthorizationHeader => ErrorKind::Unauthorized,
            AuthError::NotFound => ErrorKind::NotFound,
            AuthError::Configuration(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the logs; the client sees a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Configuration(_) | AuthError::Internal(_) => {
                AppError::internal("internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Configuration(msg) => {
                tracing::error!(message = %msg, "Auth configuration error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidSignature => {
                tracing::warn!("Token signature mismatch");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            AuthError::Internal(err.to_string())
        } else {
            AuthError::InvalidInput(err.message().to_string())
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidInput(rejection.body_text())
    }
}

impl From<platform::crypto::SecretKeyError> for AuthError {
    fn from(err: platform::crypto::SecretKeyError) -> Self {
        AuthError::Configuration(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Password hashing task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::DuplicateUsername, StatusCode::CONFLICT),
            (AuthError::DuplicateEmail, StatusCode::CONFLICT),
            (AuthError::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::MalformedToken, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidSignature, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidEncoding, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidClaims, StatusCode::UNAUTHORIZED),
            (AuthError::TokenExpired, StatusCode::UNAUTHORIZED),
            (AuthError::NotFound, StatusCode::NOT_FOUND),
            (AuthError::MissingCredential, StatusCode::UNAUTHORIZED),
            (
                AuthError::MalformedAuthorizationHeader,
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let app_err = AuthError::Internal("argon2 exploded".into()).to_app_error();
        assert!(!app_err.message().contains("argon2"));
    }

    #[test]
    fn test_login_message_is_ambiguous() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid username or password"
        );
    }

    #[test]
    fn test_app_error_conversion() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::InvalidInput(ref m) if m == "Invalid email format"));

        let err: AuthError = AppError::internal("hashing failed").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}

/**
 * API Error Types
 *
 * This module defines the error type used by every HTTP handler in the
 * service. Each variant maps to a fixed HTTP status, except `NotFound`,
 * which carries its own status because a missing account is reported as
 * 400 by the relationship endpoints and as 404 by the profile endpoints.
 *
 * # Error Categories
 *
 * ## Domain Errors
 *
 * Domain errors describe a request the service understood but refused:
 * - Missing registration or login fields
 * - Registering an email or username that is already taken
 * - Wrong credentials, or a missing/invalid session token
 * - Following yourself, or referencing an account that does not exist
 *
 * Domain error messages are safe to show to clients and pass through to
 * the response body unchanged.
 *
 * ## Infrastructure Errors
 *
 * Infrastructure errors wrap failures from the database, the token codec,
 * the password hasher, and the asset store. Their internal detail is logged
 * server-side and replaced with a generic message in the response.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Service-wide error type
///
/// This enum represents all possible errors that handlers can return.
/// Each variant knows its HTTP status and its client-facing message.
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use xfgram::error::ApiError;
///
/// let err = ApiError::invalid_operation("You cannot follow or unfollow yourself");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or empty.
    ///
    /// Reported as 401 to match the credential endpoints' historical
    /// behavior, which clients already depend on.
    #[error("{0}")]
    InvalidInput(String),

    /// Registration against an email or username that is already taken.
    #[error("{0}")]
    DuplicateAccount(String),

    /// Login failed, or a session token was missing or did not verify.
    #[error("{0}")]
    InvalidCredentials(String),

    /// A referenced account or record does not exist.
    ///
    /// Carries its own status: relationship endpoints report a missing
    /// account as 400, profile reads report it as 404.
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
        /// HTTP status code for this error
        status: StatusCode,
    },

    /// The request is well-formed but not allowed (e.g. self-follow).
    #[error("{0}")]
    InvalidOperation(String),

    /// Database query or transaction failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session token creation failure.
    #[error("session token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or verification failure.
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// The asset store rejected or failed a picture upload.
    #[error("asset upload failed: {0}")]
    Upload(String),

    /// Any other internal failure with no dedicated variant.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a `DuplicateAccount` error
    pub fn duplicate_account(message: impl Into<String>) -> Self {
        Self::DuplicateAccount(message.into())
    }

    /// Create an `InvalidCredentials` error
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials(message.into())
    }

    /// Create a `NotFound` error reported as 404
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    /// Create a `NotFound` error with an explicit status
    ///
    /// The relationship and suggestion endpoints report missing accounts
    /// as 400 rather than 404.
    pub fn not_found_with(status: StatusCode, message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            status,
        }
    }

    /// Create an `InvalidOperation` error
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput` / `DuplicateAccount` / `InvalidCredentials` - 401 Unauthorized
    /// - `NotFound` - Uses the status carried by the error
    /// - `InvalidOperation` - 400 Bad Request
    /// - `Upload` - 502 Bad Gateway
    /// - `Database` / `Token` / `Hash` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::UNAUTHORIZED,
            Self::DuplicateAccount(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound { status, .. } => *status,
            Self::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            Self::Upload(_) => StatusCode::BAD_GATEWAY,
            Self::Database(_) | Self::Token(_) | Self::Hash(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message to put in the response body
    ///
    /// Domain errors pass their message through unchanged. Infrastructure
    /// errors are replaced with a generic message; the detail is only logged.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidInput(message)
            | Self::DuplicateAccount(message)
            | Self::InvalidCredentials(message)
            | Self::InvalidOperation(message) => message.clone(),
            Self::NotFound { message, .. } => message.clone(),
            Self::Upload(_) => "Failed to store the profile picture".to_string(),
            Self::Database(_) | Self::Token(_) | Self::Hash(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Whether this error is a server-side failure worth logging at error level
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input() {
        let error = ApiError::invalid_input("Information is missing");
        match error {
            ApiError::InvalidInput(message) => assert_eq!(message, "Information is missing"),
            _ => panic!("Expected InvalidInput"),
        }
    }

    #[test]
    fn test_not_found_default_status() {
        let error = ApiError::not_found("Account not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_with_status() {
        let error = ApiError::not_found_with(StatusCode::BAD_REQUEST, "Account not found");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "Account not found");
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::invalid_input("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::duplicate_account("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::invalid_credentials("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::invalid_operation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Upload("boom".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_infrastructure_detail_is_hidden() {
        let error = ApiError::Internal("connection pool exhausted".into());
        assert_eq!(error.public_message(), "Internal server error");
        assert!(error.is_internal());

        let error = ApiError::Upload("asset host returned 503".into());
        assert_eq!(error.public_message(), "Failed to store the profile picture");
        assert!(error.is_internal());
    }

    #[test]
    fn test_domain_message_passes_through() {
        let error = ApiError::invalid_credentials("Incorrect email or password");
        assert_eq!(error.public_message(), "Incorrect email or password");
        assert!(!error.is_internal());
    }
}

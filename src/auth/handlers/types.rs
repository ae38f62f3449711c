/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * credential handlers. These types are shared across register, login,
 * and logout.
 */

use serde::{Deserialize, Serialize};

use crate::users::UserProfile;

/// Registration request
///
/// Contains the username, email, and password for account creation.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Chosen username (must be unique)
    pub username: String,
    /// Email address (must be unique)
    pub email: String,
    /// Password (hashed before storage)
    pub password: String,
}

/// Login request
///
/// Contains the email and password for credential verification.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email the account was registered with
    pub email: String,
    /// Password (verified against the stored hash)
    pub password: String,
}

/// Login response
///
/// Returned by the login handler alongside the session cookie. Carries the
/// token for clients that prefer an Authorization header over the cookie,
/// plus the sanitized profile of the account that signed in.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Greeting for the signed-in account
    pub message: String,
    /// Always `true` on this path
    pub success: bool,
    /// JWT session token (one-day expiration)
    pub token: String,
    /// Sanitized profile of the signed-in account
    pub user: UserProfile,
}

/// Plain acknowledgement envelope
///
/// Used by register, logout, and any endpoint whose success response has
/// no payload. Error responses use the same shape with `success: false`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    /// Human-readable outcome description
    pub message: String,
    /// Whether the request succeeded
    pub success: bool,
}

impl MessageResponse {
    /// Build a success acknowledgement
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }
}

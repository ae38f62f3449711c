/**
 * Login Handler
 *
 * This module implements credential verification for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Check that email and password are present
 * 2. Look up the account by email
 * 3. Verify the password with bcrypt
 * 4. Sign a one-day session token
 * 5. Install the token in an HttpOnly cookie and return it in the body
 *    together with the sanitized profile
 *
 * # Security
 *
 * - Unknown email and wrong password both answer 401 with the exact same
 *   message, so the response never confirms whether an email is registered
 * - The session cookie is HttpOnly and SameSite=Strict
 * - The profile in the response is the sanitized projection; it has no
 *   password field
 */

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::Json,
};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::sessions::{create_token, session_cookie};
use crate::error::ApiError;
use crate::users::UserStore;

/// The one message both credential failures share
pub const LOGIN_FAILED: &str = "Incorrect email or password";

/// Login handler
///
/// Verifies an email and password pair and starts a session.
///
/// # Arguments
///
/// * `State(store)` - Account store handle
/// * `Json(request)` - Login request
///
/// # Returns
///
/// `200 OK` with a `Set-Cookie` header installing the session and a body
/// carrying the token, a greeting, and the sanitized profile
///
/// # Errors
///
/// * `401 Unauthorized` - Missing fields, unknown email, or wrong password
/// * `500 Internal Server Error` - Database, hashing, or token failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Welcome back ines",
///   "success": true,
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "username": "ines",
///     "email": "ines@example.com",
///     "followers": [],
///     "following": [],
///     "posts": []
///   }
/// }
/// ```
pub async fn login(
    State(store): State<UserStore>,
    Json(request): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), ApiError> {
    tracing::info!("Login request for: {}", request.email);

    if request.email.trim().is_empty() || request.password.is_empty() {
        tracing::warn!("Login with missing fields");
        return Err(ApiError::invalid_input("Information is missing"));
    }

    let user = store.find_by_email(&request.email).await?.ok_or_else(|| {
        tracing::warn!("Login for unknown email: {}", request.email);
        ApiError::invalid_credentials(LOGIN_FAILED)
    })?;

    // Verify password
    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Wrong password for: {}", request.email);
        return Err(ApiError::invalid_credentials(LOGIN_FAILED));
    }

    // Sign the session token and build its cookie
    let token = create_token(user.id)?;
    let cookie = HeaderValue::from_str(&session_cookie(&token))
        .map_err(|e| ApiError::Internal(format!("session cookie not header-safe: {e}")))?;

    let message = format!("Welcome back {}", user.username);
    let profile = store.load_profile(&user).await?;

    tracing::info!("Login succeeded for: {} ({})", user.username, user.email);

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie);

    Ok((
        headers,
        Json(AuthResponse {
            message,
            success: true,
            token,
            user: profile,
        }),
    ))
}

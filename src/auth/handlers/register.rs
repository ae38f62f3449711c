/**
 * Registration Handler
 *
 * This module implements the account registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Check that username, email, and password are present
 * 2. Check that no account already uses the email or username
 * 3. Hash the password with bcrypt
 * 4. Create the account
 * 5. Return an acknowledgement
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - The response carries no token and no account data; a fresh account
 *   signs in through the login endpoint like any other
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::error::ApiError;
use crate::users::UserStore;

/// Bcrypt cost for new passwords
const HASH_COST: u32 = 10;

/// Check for missing or empty registration fields
fn has_missing_fields(request: &RegisterRequest) -> bool {
    request.username.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
}

/// Registration handler
///
/// Creates a new account from a username, email, and password. On success
/// the client gets a bare acknowledgement; signing in is a separate step.
///
/// # Arguments
///
/// * `State(store)` - Account store handle
/// * `Json(request)` - Registration request
///
/// # Returns
///
/// `201 Created` with an acknowledgement envelope
///
/// # Errors
///
/// * `401 Unauthorized` - A field is missing or empty, or the email or
///   username is already taken
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "ines",
///   "email": "ines@example.com",
///   "password": "hunter2hunter2"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Account has been created successfully",
///   "success": true
/// }
/// ```
pub async fn register(
    State(store): State<UserStore>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    tracing::info!(
        "Registration request for username: {}, email: {}",
        request.username,
        request.email
    );

    if has_missing_fields(&request) {
        tracing::warn!("Registration with missing fields");
        return Err(ApiError::invalid_input("Information is missing"));
    }

    // Check if email already exists
    if store.find_by_email(&request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::duplicate_account(
            "User with this email already exists",
        ));
    }

    // Check if username already exists
    if store.find_by_username(&request.username).await?.is_some() {
        tracing::warn!("Username already taken: {}", request.username);
        return Err(ApiError::duplicate_account("Username is already taken"));
    }

    // Hash password
    let password_hash = hash(&request.password, HASH_COST)?;

    // Create account; the unique constraints catch any registration that
    // raced past the checks above
    let user = store
        .create(&request.username, &request.email, &password_hash)
        .await?;

    tracing::info!("Account created: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Account has been created successfully")),
    ))
}

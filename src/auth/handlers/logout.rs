/**
 * Logout Handler
 *
 * This module implements session teardown for POST /api/auth/logout.
 *
 * Sessions are stateless, so logout is nothing more than clearing the
 * session cookie: the response sets `token` to an empty value with
 * `Max-Age=0`. No server-side record is consulted or removed, which means
 * a token the client kept elsewhere stays valid until it expires.
 */

use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::Json,
};

use crate::auth::handlers::types::MessageResponse;
use crate::auth::sessions::clear_session_cookie;
use crate::error::ApiError;

/// Logout handler
///
/// Clears the session cookie. Succeeds whether or not a session was
/// present, so repeated logouts are harmless.
///
/// # Returns
///
/// `200 OK` with a `Set-Cookie` header that expires the cookie immediately
pub async fn logout() -> Result<(HeaderMap, Json<MessageResponse>), ApiError> {
    let cookie = HeaderValue::from_str(&clear_session_cookie())
        .map_err(|e| ApiError::Internal(format!("session cookie not header-safe: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie);

    tracing::info!("Session cookie cleared");

    Ok((headers, Json(MessageResponse::ok("Logged out successfully"))))
}

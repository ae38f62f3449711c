/**
 * Session Middleware
 *
 * This module protects routes that require a signed-in account. It pulls
 * the session token out of the request, verifies it, confirms the account
 * still exists, and hands the account id to handlers through request
 * extensions.
 *
 * The token is read from the session cookie first, then from a
 * `Authorization: Bearer` header, so browser clients and API clients both
 * work without extra configuration.
 */

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::{token_from_cookie_header, verify_token};
use crate::error::ApiError;
use crate::users::UserStore;

/// Message for every authentication failure on protected routes
const NOT_AUTHENTICATED: &str = "User is not authenticated";

/// Session data extracted from a verified token
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub user_id: Uuid,
}

/// Find the session token in the request headers
///
/// Checks the session cookie before the `Authorization` header; a cookie
/// installed by login wins over a stale bearer token.
fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    if let Some(cookie_header) = headers.get(header::COOKIE).and_then(|h| h.to_str().ok()) {
        if let Some(token) = token_from_cookie_header(cookie_header) {
            return Some(token);
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Session-checking middleware
///
/// This middleware:
/// 1. Extracts the session token from the cookie or Authorization header
/// 2. Verifies the token signature and expiry
/// 3. Confirms the account in the token still exists
/// 4. Attaches a [`SessionUser`] to request extensions for handlers
///
/// Returns 401 Unauthorized with the standard error envelope if any step
/// fails.
pub async fn require_session(
    State(store): State<UserStore>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = token_from_headers(request.headers()).ok_or_else(|| {
        tracing::warn!("Request without session token");
        ApiError::invalid_credentials(NOT_AUTHENTICATED)
    })?;

    // Verify token
    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Session token rejected: {:?}", e);
        ApiError::invalid_credentials(NOT_AUTHENTICATED)
    })?;

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!("Session token with malformed subject");
        ApiError::invalid_credentials(NOT_AUTHENTICATED)
    })?;

    // Only trust tokens whose account still exists
    if store.find_by_id(user_id).await?.is_none() {
        tracing::warn!("Session token for unknown account: {}", user_id);
        return Err(ApiError::invalid_credentials(NOT_AUTHENTICATED));
    }

    request.extensions_mut().insert(SessionUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the signed-in account
///
/// Use as a handler parameter on routes behind [`require_session`] to get
/// the [`SessionUser`] the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<SessionUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("SessionUser not found in request extensions");
                ApiError::invalid_credentials(NOT_AUTHENTICATED)
            })?;

        Ok(AuthUser(session))
    }
}

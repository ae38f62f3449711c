/**
 * Follow Toggle Handler
 *
 * This module implements the follow/unfollow toggle for
 * POST /api/users/{id}/follow.
 *
 * # Toggle Process
 *
 * 1. Reject self-follow
 * 2. Check that both accounts exist
 * 3. Flip the follow edge inside one database transaction
 * 4. Report which way it flipped
 *
 * There is no separate unfollow endpoint: calling the toggle twice
 * restores the original state.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::users::UserStore;

/// Toggle response
///
/// `following` reports the state after the call, so clients can update
/// their buttons without re-fetching the profile.
#[derive(Serialize, Deserialize, Debug)]
pub struct FollowResponse {
    /// "Followed" or "Unfollowed"
    pub message: String,
    /// Always `true` on this path
    pub success: bool,
    /// Whether the caller follows the target after the toggle
    pub following: bool,
}

/// Follow/unfollow toggle handler
///
/// Flips the follow edge from the signed-in account to the account in the
/// path.
///
/// # Arguments
///
/// * `State(store)` - Account store handle
/// * `AuthUser(session)` - Signed-in account, attached by the middleware
/// * `Path(target_id)` - Account whose edge to flip
///
/// # Returns
///
/// `200 OK` with the direction the edge flipped
///
/// # Errors
///
/// * `400 Bad Request` - Target is the caller itself, or either account
///   does not exist
/// * `401 Unauthorized` - No valid session
/// * `500 Internal Server Error` - Database failure
pub async fn follow_or_unfollow(
    State(store): State<UserStore>,
    AuthUser(session): AuthUser,
    Path(target_id): Path<Uuid>,
) -> Result<Json<FollowResponse>, ApiError> {
    let actor_id = session.user_id;
    tracing::info!("Follow toggle: {} -> {}", actor_id, target_id);

    if actor_id == target_id {
        tracing::warn!("Self-follow rejected for: {}", actor_id);
        return Err(ApiError::invalid_operation(
            "You cannot follow/unfollow yourself",
        ));
    }

    // Both ends of the edge must exist
    if store.find_by_id(actor_id).await?.is_none()
        || store.find_by_id(target_id).await?.is_none()
    {
        tracing::warn!("Follow toggle against missing account: {}", target_id);
        return Err(ApiError::not_found_with(
            axum::http::StatusCode::BAD_REQUEST,
            "Account not found",
        ));
    }

    let following = store.toggle_follow(actor_id, target_id).await?;

    let message = if following { "Followed" } else { "Unfollowed" };
    tracing::info!("{}: {} -> {}", message, actor_id, target_id);

    Ok(Json(FollowResponse {
        message: message.to_string(),
        success: true,
        following,
    }))
}

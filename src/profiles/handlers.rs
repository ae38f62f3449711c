/**
 * Profile Handlers
 *
 * HTTP handlers for the profile endpoints:
 *
 * - GET  /api/users/{id}/profile - Read any account's profile
 * - POST /api/users/profile/edit - Edit the signed-in account's profile
 * - GET  /api/users/suggested    - List other accounts to follow
 *
 * All three sit behind the session middleware. Every account shape these
 * handlers return is the sanitized projection; password hashes cannot
 * appear in any response by construction.
 */

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::profiles::update::{apply_update, read_profile_update};
use crate::uploads::SharedAssetStore;
use crate::users::{UserProfile, UserStore};

/// Single-profile response
#[derive(Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// Edit acknowledgement with the refreshed profile
#[derive(Serialize, Deserialize, Debug)]
pub struct EditProfileResponse {
    pub message: String,
    pub success: bool,
    pub user: UserProfile,
}

/// Suggestion list response
#[derive(Serialize, Deserialize, Debug)]
pub struct SuggestedUsersResponse {
    pub success: bool,
    pub users: Vec<UserProfile>,
}

/// Profile read handler
///
/// # Arguments
///
/// * `State(store)` - Account store handle
/// * `Path(id)` - Account whose profile to read
///
/// # Errors
///
/// * `404 Not Found` - No account with this id
/// * `401 Unauthorized` - No valid session
pub async fn get_profile(
    State(store): State<UserStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = store.find_by_id(id).await?.ok_or_else(|| {
        tracing::warn!("Profile read for unknown account: {}", id);
        ApiError::not_found("User not found")
    })?;

    let profile = store.load_profile(&user).await?;

    Ok(Json(ProfileResponse {
        success: true,
        user: profile,
    }))
}

/// Profile edit handler
///
/// Applies a partial update from a multipart body to the signed-in
/// account. See [`crate::profiles::update`] for field semantics.
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or unrecognized gender value
/// * `401 Unauthorized` - No valid session
/// * `404 Not Found` - The session's account no longer exists
/// * `502 Bad Gateway` - Picture upload failed or no asset store configured
pub async fn edit_profile(
    State(store): State<UserStore>,
    State(assets): State<Option<SharedAssetStore>>,
    AuthUser(session): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<EditProfileResponse>, ApiError> {
    tracing::info!("Profile edit for: {}", session.user_id);

    let update = read_profile_update(&mut multipart).await?;
    let profile = apply_update(&store, assets.as_ref(), session.user_id, update).await?;

    tracing::info!("Profile updated for: {}", session.user_id);

    Ok(Json(EditProfileResponse {
        message: "Profile has been updated".to_string(),
        success: true,
        user: profile,
    }))
}

/// Suggestion list handler
///
/// Returns every account except the caller, newest first. An empty result
/// answers 400, which clients treat as "nobody to suggest yet".
///
/// # Errors
///
/// * `400 Bad Request` - No other accounts exist
/// * `401 Unauthorized` - No valid session
pub async fn suggested_users(
    State(store): State<UserStore>,
    AuthUser(session): AuthUser,
) -> Result<Json<SuggestedUsersResponse>, ApiError> {
    let users = store.all_except(session.user_id).await?;

    if users.is_empty() {
        tracing::warn!("No accounts to suggest for: {}", session.user_id);
        return Err(ApiError::not_found_with(
            StatusCode::BAD_REQUEST,
            "No users so far currently",
        ));
    }

    Ok(Json(SuggestedUsersResponse {
        success: true,
        users,
    }))
}

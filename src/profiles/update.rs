/**
 * Profile Updates
 *
 * This module carries a profile edit from the wire to the database: the
 * `ProfileUpdate` value holds whichever fields the client submitted,
 * `read_profile_update` fills it from a multipart body, and `apply_update`
 * applies it to the stored account.
 *
 * # Update Order
 *
 * The picture is uploaded to the asset store before anything is written
 * to the database. If the upload fails, the account row is never touched;
 * if only the database write fails, the orphaned asset is harmless.
 */

use axum::extract::Multipart;
use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::uploads::{AssetUpload, SharedAssetStore};
use crate::users::{Gender, UserProfile, UserStore};

/// Multipart field names accepted by the edit endpoint
const FIELD_BIO: &str = "bio";
const FIELD_GENDER: &str = "gender";
const FIELD_PICTURE: &str = "picture";

/// The fields a profile edit submitted
///
/// `None` means "not submitted, keep the stored value". There is no way to
/// clear a field back to empty through this endpoint.
#[derive(Default, Debug)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub gender: Option<Gender>,
    pub picture: Option<AssetUpload>,
}

impl ProfileUpdate {
    /// Whether the edit submitted nothing at all
    pub fn is_empty(&self) -> bool {
        self.bio.is_none() && self.gender.is_none() && self.picture.is_none()
    }
}

/// Read a `ProfileUpdate` out of a multipart body
///
/// Unknown fields are skipped. A gender value outside the accepted set is
/// rejected here rather than written through to storage.
pub async fn read_profile_update(multipart: &mut Multipart) -> Result<ProfileUpdate, ApiError> {
    let mut update = ProfileUpdate::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_operation(format!("Malformed upload body: {e}")))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        match name.as_str() {
            FIELD_BIO => {
                let bio = field
                    .text()
                    .await
                    .map_err(|e| ApiError::invalid_operation(format!("Malformed upload body: {e}")))?;
                update.bio = Some(bio);
            }
            FIELD_GENDER => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ApiError::invalid_operation(format!("Malformed upload body: {e}")))?;
                let gender = Gender::from_str(&raw).ok_or_else(|| {
                    tracing::warn!("Unrecognized gender value: {}", raw);
                    ApiError::invalid_operation("Gender must be one of male, female, other")
                })?;
                update.gender = Some(gender);
            }
            FIELD_PICTURE => {
                // Field metadata has to be copied out before the bytes
                // call consumes the field
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_operation(format!("Malformed upload body: {e}")))?;
                update.picture = Some(AssetUpload {
                    filename,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    Ok(update)
}

/// Apply a profile update to a stored account
///
/// # Arguments
///
/// * `store` - Account store handle
/// * `assets` - Asset store, if one is configured
/// * `user_id` - Account to update
/// * `update` - Fields to change
///
/// # Returns
///
/// The sanitized profile after the update
///
/// # Errors
///
/// * `NotFound` (404) - The account does not exist
/// * `Upload` - No asset store is configured, or the upload failed; the
///   account is left unchanged either way
pub async fn apply_update(
    store: &UserStore,
    assets: Option<&SharedAssetStore>,
    user_id: Uuid,
    update: ProfileUpdate,
) -> Result<UserProfile, ApiError> {
    let mut user = store
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let mut changed = false;

    if let Some(picture) = update.picture {
        let assets =
            assets.ok_or_else(|| ApiError::Upload("asset store is not configured".to_string()))?;
        let url = assets.upload(picture).await?;
        user.profile_picture = Some(url);
        changed = true;
    }

    if let Some(bio) = update.bio {
        user.bio = Some(bio);
        changed = true;
    }

    if let Some(gender) = update.gender {
        user.gender = Some(gender);
        changed = true;
    }

    if changed {
        user.updated_at = Utc::now();
        store.save(&user).await?;
    }

    Ok(store.load_profile(&user).await?)
}

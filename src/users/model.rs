/**
 * Account Model Types
 *
 * This module defines the account record as stored in the database and the
 * sanitized projection handed out over the API.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile gender field
///
/// Closed set of values; anything else is rejected at the edge instead of
/// being written through to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Convert to the string stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Parse from a stored or submitted string, `None` if unrecognized
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Account record as stored in the `users` table
///
/// Deliberately does not implement `Serialize`: the password hash must
/// never reach a response body. Use [`User::sanitized`] to build the
/// projection that handlers return.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Short free-form self description
    pub bio: Option<String>,
    /// Profile gender field
    pub gender: Option<Gender>,
    /// URL of the profile picture in the asset store
    pub profile_picture: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh account record with a new id and current timestamps
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            bio: None,
            gender: None,
            profile_picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Produce the sanitized projection returned by the API
    ///
    /// The follower, following, and post id lists come from the store;
    /// the password hash is dropped here and has no counterpart field in
    /// [`UserProfile`].
    pub fn sanitized(
        self,
        followers: Vec<Uuid>,
        following: Vec<Uuid>,
        posts: Vec<Uuid>,
    ) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username,
            email: self.email,
            bio: self.bio,
            gender: self.gender,
            profile_picture: self.profile_picture,
            followers,
            following,
            posts,
            created_at: self.created_at,
        }
    }
}

/// Public view of an account
///
/// This is the only account shape that crosses the API boundary. It is
/// built exclusively through [`User::sanitized`], so a password can never
/// be serialized by accident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub gender: Option<Gender>,
    pub profile_picture: Option<String>,
    /// Ids of accounts following this one
    pub followers: Vec<Uuid>,
    /// Ids of accounts this one follows
    pub following: Vec<Uuid>,
    /// Ids of this account's posts, oldest first
    pub posts: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trip() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::from_str(gender.as_str()), Some(gender));
        }
    }

    #[test]
    fn test_gender_rejects_unknown() {
        assert_eq!(Gender::from_str("robot"), None);
        assert_eq!(Gender::from_str(""), None);
        assert_eq!(Gender::from_str("Male"), None);
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
    }

    #[test]
    fn test_sanitized_has_no_password_field() {
        let user = User::new(
            "ines".to_string(),
            "ines@example.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        );
        let profile = user.sanitized(vec![], vec![], vec![]);

        let value = serde_json::to_value(&profile).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(keys.iter().all(|k| !k.contains("password")));
        assert_eq!(value["username"], "ines");
        assert_eq!(value["email"], "ines@example.com");
    }

    #[test]
    fn test_sanitized_carries_relationship_ids() {
        let user = User::new(
            "malik".to_string(),
            "malik@example.com".to_string(),
            "hash".to_string(),
        );
        let follower = Uuid::new_v4();
        let followee = Uuid::new_v4();
        let post = Uuid::new_v4();

        let profile = user.sanitized(vec![follower], vec![followee], vec![post]);
        assert_eq!(profile.followers, vec![follower]);
        assert_eq!(profile.following, vec![followee]);
        assert_eq!(profile.posts, vec![post]);
    }

    #[test]
    fn test_new_user_starts_with_empty_profile_fields() {
        let user = User::new("sam".into(), "sam@example.com".into(), "hash".into());
        assert!(user.bio.is_none());
        assert!(user.gender.is_none());
        assert!(user.profile_picture.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }
}

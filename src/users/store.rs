/**
 * Account Store
 *
 * Database operations for accounts, follow edges, and post references.
 * The store is a cheap-to-clone handle around the connection pool and is
 * the only place that touches account SQL; services receive it as a
 * parameter instead of reaching for a global connection.
 *
 * UUIDs are stored as TEXT and timestamps as RFC 3339 TEXT, decoded back
 * into `Uuid` / `DateTime<Utc>` when rows are read.
 */

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::error::ApiError;
use crate::users::model::{Gender, User, UserProfile};

const USER_COLUMNS: &str =
    "id, username, email, password_hash, bio, gender, profile_picture, created_at, updated_at";

/// Handle for account reads and writes
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Wrap a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Borrow the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a new account
    ///
    /// # Arguments
    /// * `username` - Chosen username, must be unique
    /// * `email` - Email address, must be unique
    /// * `password_hash` - Bcrypt hash of the password
    ///
    /// # Returns
    /// The created account, or `DuplicateAccount` if the email or username
    /// is already taken. The unique constraints are the source of truth, so
    /// two concurrent registrations cannot both succeed.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        let user = User::new(
            username.to_string(),
            email.to_string(),
            password_hash.to_string(),
        );

        let result = sqlx::query(
            "INSERT INTO users (id, username, email, password_hash, bio, gender, profile_picture, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.bio)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(&user.profile_picture)
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                let message = if db_err.message().contains("users.email") {
                    "User with this email already exists"
                } else {
                    "Username is already taken"
                };
                Err(ApiError::duplicate_account(message))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get account by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Get account by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Get account by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Persist the mutable profile fields of an account
    ///
    /// Only bio, gender, profile picture, and `updated_at` are written;
    /// identity and credential columns never change through this path.
    pub async fn save(&self, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET bio = ?, gender = ?, profile_picture = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&user.bio)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(&user.profile_picture)
        .bind(user.updated_at.to_rfc3339())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Number of accounts in the store
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }

    /// Ids of accounts following `id`, oldest edge first
    pub async fn followers_of(&self, id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT follower_id FROM follows
             WHERE followee_id = ?
             ORDER BY created_at ASC, follower_id ASC",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| parse_uuid(&row.get::<String, _>("follower_id")))
            .collect())
    }

    /// Ids of accounts `id` follows, oldest edge first
    pub async fn following_of(&self, id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT followee_id FROM follows
             WHERE follower_id = ?
             ORDER BY created_at ASC, followee_id ASC",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| parse_uuid(&row.get::<String, _>("followee_id")))
            .collect())
    }

    /// Ids of posts authored by `id`, oldest first
    pub async fn post_ids_for(&self, id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id FROM posts WHERE author_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| parse_uuid(&row.get::<String, _>("id")))
            .collect())
    }

    /// Flip the follow edge from `follower` to `followee`
    ///
    /// # Returns
    /// `true` if the edge exists after the call (a follow happened),
    /// `false` if it was removed (an unfollow happened).
    ///
    /// The check and the write run in one transaction, so both sides of the
    /// relationship change together and concurrent toggles of the same pair
    /// serialize instead of double-inserting.
    pub async fn toggle_follow(&self, follower: Uuid, followee: Uuid) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query(
            "SELECT 1 FROM follows WHERE follower_id = ? AND followee_id = ?",
        )
        .bind(follower.to_string())
        .bind(followee.to_string())
        .fetch_optional(&mut *tx)
        .await?;

        let now_following = if existing.is_some() {
            sqlx::query("DELETE FROM follows WHERE follower_id = ? AND followee_id = ?")
                .bind(follower.to_string())
                .bind(followee.to_string())
                .execute(&mut *tx)
                .await?;
            false
        } else {
            sqlx::query(
                "INSERT INTO follows (follower_id, followee_id, created_at) VALUES (?, ?, ?)",
            )
            .bind(follower.to_string())
            .bind(followee.to_string())
            .bind(Utc::now().to_rfc3339())
            .execute(&mut *tx)
            .await?;
            true
        };

        tx.commit().await?;
        Ok(now_following)
    }

    /// Build the sanitized profile for one account
    pub async fn load_profile(&self, user: &User) -> Result<UserProfile, sqlx::Error> {
        let followers = self.followers_of(user.id).await?;
        let following = self.following_of(user.id).await?;
        let posts = self.post_ids_for(user.id).await?;

        Ok(user.clone().sanitized(followers, following, posts))
    }

    /// Sanitized profiles of every account except `id`, newest first
    ///
    /// Follow edges and post references are fetched in bulk and joined in
    /// memory, so the cost stays at three queries regardless of how many
    /// accounts exist.
    pub async fn all_except(&self, id: Uuid) -> Result<Vec<UserProfile>, sqlx::Error> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id != ? ORDER BY created_at DESC, username ASC"
        ))
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in &rows {
            users.push(row_to_user(row)?);
        }

        let edge_rows = sqlx::query(
            "SELECT follower_id, followee_id FROM follows
             ORDER BY created_at ASC, follower_id ASC, followee_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut followers: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        let mut following: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in edge_rows {
            let follower = parse_uuid(&row.get::<String, _>("follower_id"));
            let followee = parse_uuid(&row.get::<String, _>("followee_id"));
            following.entry(follower).or_default().push(followee);
            followers.entry(followee).or_default().push(follower);
        }

        let post_rows = sqlx::query(
            "SELECT id, author_id FROM posts ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut posts: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in post_rows {
            let author = parse_uuid(&row.get::<String, _>("author_id"));
            let post = parse_uuid(&row.get::<String, _>("id"));
            posts.entry(author).or_default().push(post);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let id = user.id;
                user.sanitized(
                    followers.remove(&id).unwrap_or_default(),
                    following.remove(&id).unwrap_or_default(),
                    posts.remove(&id).unwrap_or_default(),
                )
            })
            .collect())
    }
}

/// Convert a database row to a `User`
fn row_to_user(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: parse_uuid(&row.try_get::<String, _>("id")?),
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        bio: row.try_get("bio")?,
        gender: row
            .try_get::<Option<String>, _>("gender")?
            .and_then(|s| Gender::from_str(&s)),
        profile_picture: row.try_get("profile_picture")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?),
        updated_at: parse_timestamp(&row.try_get::<String, _>("updated_at")?),
    })
}

fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap_or_default()
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

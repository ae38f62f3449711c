//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: an in-memory database with
//! migrations applied, store construction, and account seeding.

#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use xfgram::users::{User, UserStore};

/// Bcrypt cost for seeded passwords, low to keep the suite fast
pub const TEST_HASH_COST: u32 = 4;

/// Create an in-memory database pool with all migrations applied
///
/// Capped at one connection that never idles out: every connection to
/// `sqlite::memory:` is its own empty database, and closing the last
/// connection discards it.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create a `UserStore` over a fresh in-memory database
pub async fn memory_store() -> UserStore {
    UserStore::new(memory_pool().await)
}

/// Seed an account with a usable password
pub async fn seed_user(store: &UserStore, username: &str, email: &str, password: &str) -> User {
    let hash = bcrypt::hash(password, TEST_HASH_COST).expect("Failed to hash password");
    store
        .create(username, email, &hash)
        .await
        .expect("Failed to seed account")
}

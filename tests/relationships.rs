//! Follow graph tests
//!
//! The follow/unfollow toggle exercised at the handler level, with the
//! edge table inspected through the store after each call.

mod common;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use common::{memory_store, seed_user};
use xfgram::error::conversion::client_view;
use xfgram::middleware::{AuthUser, SessionUser};
use xfgram::relationships::{follow_or_unfollow, FollowResponse};
use xfgram::users::UserStore;
use xfgram::ApiError;

async fn toggle(
    store: &UserStore,
    actor: Uuid,
    target: Uuid,
) -> Result<FollowResponse, ApiError> {
    follow_or_unfollow(
        State(store.clone()),
        AuthUser(SessionUser { user_id: actor }),
        Path(target),
    )
    .await
    .map(|Json(body)| body)
}

#[tokio::test]
async fn test_first_toggle_follows() {
    let store = memory_store().await;
    let ines = seed_user(&store, "ines", "ines@example.com", "pw").await;
    let malik = seed_user(&store, "malik", "malik@example.com", "pw").await;

    let body = toggle(&store, ines.id, malik.id).await.unwrap();
    assert!(body.success);
    assert!(body.following);
    assert_eq!(body.message, "Followed");

    // Both sides of the relationship see the same edge
    assert_eq!(store.followers_of(malik.id).await.unwrap(), vec![ines.id]);
    assert_eq!(store.following_of(ines.id).await.unwrap(), vec![malik.id]);

    // The reverse direction is untouched
    assert!(store.followers_of(ines.id).await.unwrap().is_empty());
    assert!(store.following_of(malik.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_second_toggle_unfollows() {
    let store = memory_store().await;
    let ines = seed_user(&store, "ines", "ines@example.com", "pw").await;
    let malik = seed_user(&store, "malik", "malik@example.com", "pw").await;

    toggle(&store, ines.id, malik.id).await.unwrap();
    let body = toggle(&store, ines.id, malik.id).await.unwrap();

    assert!(!body.following);
    assert_eq!(body.message, "Unfollowed");
    assert!(store.followers_of(malik.id).await.unwrap().is_empty());
    assert!(store.following_of(ines.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_third_toggle_follows_again() {
    let store = memory_store().await;
    let ines = seed_user(&store, "ines", "ines@example.com", "pw").await;
    let malik = seed_user(&store, "malik", "malik@example.com", "pw").await;

    for _ in 0..2 {
        toggle(&store, ines.id, malik.id).await.unwrap();
    }
    let body = toggle(&store, ines.id, malik.id).await.unwrap();

    assert!(body.following);
    assert_eq!(store.followers_of(malik.id).await.unwrap(), vec![ines.id]);
}

#[tokio::test]
async fn test_directions_are_independent() {
    let store = memory_store().await;
    let ines = seed_user(&store, "ines", "ines@example.com", "pw").await;
    let malik = seed_user(&store, "malik", "malik@example.com", "pw").await;

    let forward = toggle(&store, ines.id, malik.id).await.unwrap();
    let backward = toggle(&store, malik.id, ines.id).await.unwrap();

    // A mutual follow is two edges, not one shared edge toggled twice
    assert!(forward.following);
    assert!(backward.following);
    assert_eq!(store.followers_of(ines.id).await.unwrap(), vec![malik.id]);
    assert_eq!(store.followers_of(malik.id).await.unwrap(), vec![ines.id]);
}

#[tokio::test]
async fn test_self_follow_rejected() {
    let store = memory_store().await;
    let ines = seed_user(&store, "ines", "ines@example.com", "pw").await;

    let error = toggle(&store, ines.id, ines.id).await.unwrap_err();

    let (status, message) = client_view(&error);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, "You cannot follow/unfollow yourself");
}

#[tokio::test]
async fn test_missing_target_rejected() {
    let store = memory_store().await;
    let ines = seed_user(&store, "ines", "ines@example.com", "pw").await;

    let error = toggle(&store, ines.id, Uuid::new_v4()).await.unwrap_err();

    let (status, message) = client_view(&error);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, "Account not found");
    assert!(store.following_of(ines.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_actor_rejected() {
    let store = memory_store().await;
    let malik = seed_user(&store, "malik", "malik@example.com", "pw").await;

    // A session whose account was since removed cannot write edges
    let error = toggle(&store, Uuid::new_v4(), malik.id).await.unwrap_err();

    let (status, message) = client_view(&error);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, "Account not found");
}

//! Message store tests
//!
//! The direct message store has no HTTP surface yet, so these tests talk
//! to it directly over a shared in-memory database.

mod common;

use axum::http::StatusCode;

use common::{memory_pool, seed_user};
use xfgram::error::conversion::client_view;
use xfgram::messaging::MessageStore;
use xfgram::users::UserStore;

#[tokio::test]
async fn test_create_and_read_back() {
    let pool = memory_pool().await;
    let users = UserStore::new(pool.clone());
    let messages = MessageStore::new(pool);

    let ines = seed_user(&users, "ines", "ines@example.com", "pw").await;
    let malik = seed_user(&users, "malik", "malik@example.com", "pw").await;

    let sent = messages
        .create(ines.id, malik.id, "are you around?")
        .await
        .unwrap();
    assert_eq!(sent.sender_id, ines.id);
    assert_eq!(sent.receiver_id, malik.id);

    let conversation = messages.between(ines.id, malik.id).await.unwrap();
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].id, sent.id);
    assert_eq!(conversation[0].body, "are you around?");
}

#[tokio::test]
async fn test_rejects_empty_body() {
    let pool = memory_pool().await;
    let users = UserStore::new(pool.clone());
    let messages = MessageStore::new(pool);

    let ines = seed_user(&users, "ines", "ines@example.com", "pw").await;
    let malik = seed_user(&users, "malik", "malik@example.com", "pw").await;

    for body in ["", "   ", "\n\t"] {
        let error = messages.create(ines.id, malik.id, body).await.unwrap_err();
        let (status, message) = client_view(&error);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Message text is required");
    }

    assert!(messages.between(ines.id, malik.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_between_interleaves_both_directions() {
    let pool = memory_pool().await;
    let users = UserStore::new(pool.clone());
    let messages = MessageStore::new(pool);

    let ines = seed_user(&users, "ines", "ines@example.com", "pw").await;
    let malik = seed_user(&users, "malik", "malik@example.com", "pw").await;

    messages.create(ines.id, malik.id, "one").await.unwrap();
    messages.create(malik.id, ines.id, "two").await.unwrap();
    messages.create(ines.id, malik.id, "three").await.unwrap();

    let bodies: Vec<String> = messages
        .between(ines.id, malik.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.body)
        .collect();
    assert_eq!(bodies, vec!["one", "two", "three"]);

    // Same conversation regardless of argument order
    let reversed: Vec<String> = messages
        .between(malik.id, ines.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.body)
        .collect();
    assert_eq!(reversed, bodies);
}

#[tokio::test]
async fn test_between_excludes_third_parties() {
    let pool = memory_pool().await;
    let users = UserStore::new(pool.clone());
    let messages = MessageStore::new(pool);

    let ines = seed_user(&users, "ines", "ines@example.com", "pw").await;
    let malik = seed_user(&users, "malik", "malik@example.com", "pw").await;
    let zoe = seed_user(&users, "zoe", "zoe@example.com", "pw").await;

    messages.create(ines.id, malik.id, "for malik").await.unwrap();
    messages.create(zoe.id, ines.id, "for ines").await.unwrap();

    let conversation = messages.between(ines.id, malik.id).await.unwrap();
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].body, "for malik");
}

//! Friendship graph tests
//!
//! Covers the tri-state relationship lifecycle: none -> pending -> friends,
//! plus the guards on sending and accepting requests.

mod common;

use axum::extract::{Path, State};
use axum::response::Json;
use pretty_assertions::assert_eq;

use studypulse::backend::friends::db::{
    accept_friend_request as db_accept, check_friend_status, create_friend_request, friends_of,
    pending_requests_for,
};
use studypulse::backend::friends::handlers::{
    accept_friend_request, list_friend_requests, list_friends, send_friend_request,
};
use studypulse::backend::error::ApiError;
use studypulse::backend::middleware::AuthUser;
use studypulse::shared::friendship::{FriendRequestStatus, FriendStatus, SendFriendRequestRequest};

use common::{befriend, identity, seed_user, test_pool};

#[tokio::test]
async fn strangers_have_no_relationship() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;

    let status = check_friend_status(&pool, alice.id, bob.id).await.unwrap();
    assert_eq!(status, FriendStatus::None);
}

#[tokio::test]
async fn request_moves_pair_to_pending_in_both_directions() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;

    create_friend_request(&pool, alice.id, bob.id).await.unwrap();

    assert_eq!(
        check_friend_status(&pool, alice.id, bob.id).await.unwrap(),
        FriendStatus::Pending
    );
    assert_eq!(
        check_friend_status(&pool, bob.id, alice.id).await.unwrap(),
        FriendStatus::Pending
    );
}

#[tokio::test]
async fn accept_moves_pair_to_friends() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;

    let request = create_friend_request(&pool, alice.id, bob.id).await.unwrap();
    let accepted = db_accept(&pool, request.id).await.unwrap().unwrap();

    assert_eq!(accepted.status, FriendRequestStatus::Accepted);
    assert_eq!(
        check_friend_status(&pool, alice.id, bob.id).await.unwrap(),
        FriendStatus::Friends
    );
    assert_eq!(
        check_friend_status(&pool, bob.id, alice.id).await.unwrap(),
        FriendStatus::Friends
    );
}

#[tokio::test]
async fn friends_list_is_symmetric_and_sorted_by_username() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;
    let carol = seed_user(&pool, "carol", "password1").await;

    // bob accepted alice's request; carol's request was accepted by alice.
    befriend(&pool, alice.id, bob.id).await;
    befriend(&pool, carol.id, alice.id).await;

    let friends = friends_of(&pool, alice.id).await.unwrap();
    let usernames: Vec<&str> = friends.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(usernames, vec!["bob", "carol"]);

    let friends = friends_of(&pool, bob.id).await.unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].username, "alice");

    // The handler returns profiles in the same order.
    let Json(response) = list_friends(State(pool.clone()), AuthUser(identity(&alice)))
        .await
        .unwrap();
    assert_eq!(response.friends.len(), 2);
    assert_eq!(response.friends[0].username, "bob");
}

#[tokio::test]
async fn pending_requests_list_is_oldest_first_and_recipient_only() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;
    let carol = seed_user(&pool, "carol", "password1").await;

    let first = create_friend_request(&pool, bob.id, alice.id).await.unwrap();
    let second = create_friend_request(&pool, carol.id, alice.id).await.unwrap();

    let pending = pending_requests_for(&pool, alice.id).await.unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].id, first.id);
    assert_eq!(pending[0].from_username, "bob");
    assert_eq!(pending[1].id, second.id);
    assert_eq!(pending[1].from_username, "carol");

    // The senders see nothing pending for themselves.
    assert!(pending_requests_for(&pool, bob.id).await.unwrap().is_empty());

    // Accepted requests drop out of the list.
    db_accept(&pool, first.id).await.unwrap();
    let pending = pending_requests_for(&pool, alice.id).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second.id);
}

#[tokio::test]
async fn cannot_send_request_to_yourself() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;

    let err = send_friend_request(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Json(SendFriendRequestRequest {
            to_user_id: alice.id,
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn cannot_send_request_to_unknown_user() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;

    let err = send_friend_request(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Json(SendFriendRequestRequest {
            to_user_id: uuid::Uuid::new_v4(),
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_request_conflicts_in_either_direction() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;

    send_friend_request(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Json(SendFriendRequestRequest { to_user_id: bob.id }),
    )
    .await
    .unwrap();

    // Same direction.
    let err = send_friend_request(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Json(SendFriendRequestRequest { to_user_id: bob.id }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    // Reverse direction while the first is still pending.
    let err = send_friend_request(
        State(pool.clone()),
        AuthUser(identity(&bob)),
        Json(SendFriendRequestRequest {
            to_user_id: alice.id,
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn request_to_existing_friend_conflicts() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;
    befriend(&pool, alice.id, bob.id).await;

    let err = send_friend_request(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Json(SendFriendRequestRequest { to_user_id: bob.id }),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn only_the_recipient_can_accept() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;
    let carol = seed_user(&pool, "carol", "password1").await;

    let request = create_friend_request(&pool, alice.id, bob.id).await.unwrap();

    // The sender cannot accept their own request.
    let err = accept_friend_request(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Path(request.id),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));

    // Neither can a third party.
    let err = accept_friend_request(
        State(pool.clone()),
        AuthUser(identity(&carol)),
        Path(request.id),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));

    // The recipient can.
    let Json(accepted) = accept_friend_request(
        State(pool.clone()),
        AuthUser(identity(&bob)),
        Path(request.id),
    )
    .await
    .unwrap();
    assert_eq!(accepted.status, FriendRequestStatus::Accepted);
}

#[tokio::test]
async fn accepting_twice_conflicts() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;

    let request = create_friend_request(&pool, alice.id, bob.id).await.unwrap();
    accept_friend_request(
        State(pool.clone()),
        AuthUser(identity(&bob)),
        Path(request.id),
    )
    .await
    .unwrap();

    let err = accept_friend_request(
        State(pool.clone()),
        AuthUser(identity(&bob)),
        Path(request.id),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn accepting_unknown_request_is_not_found() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;

    let err = accept_friend_request(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Path(uuid::Uuid::new_v4()),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn pending_list_handler_joins_sender_fields() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;
    let bob = seed_user(&pool, "bob", "password1").await;

    create_friend_request(&pool, bob.id, alice.id).await.unwrap();

    let Json(response) = list_friend_requests(State(pool.clone()), AuthUser(identity(&alice)))
        .await
        .unwrap();

    assert_eq!(response.requests.len(), 1);
    assert_eq!(response.requests[0].from_username, "bob");
    assert_eq!(response.requests[0].from_display_name, "bob display");
    assert_eq!(response.requests[0].status, FriendRequestStatus::Pending);
}

//! Registration, login, and profile tests

mod common;

use axum::extract::State;
use axum::response::Json;
use pretty_assertions::assert_eq;

use studypulse::backend::auth::handlers::{get_me, login, register, update_profile};
use studypulse::backend::auth::users::get_user_by_id;
use studypulse::backend::auth::sessions::verify_token;
use studypulse::backend::error::ApiError;
use studypulse::backend::middleware::AuthUser;
use studypulse::shared::user::{LoginRequest, RegisterRequest, UpdateProfileRequest};

use common::{identity, seed_user, test_pool};

fn registration(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: "longenough".to_string(),
        email: format!("{username}@example.com"),
        display_name: username.to_string(),
    }
}

#[tokio::test]
async fn register_then_login_round_trip() {
    let pool = test_pool().await;

    let Json(registered) = register(State(pool.clone()), Json(registration("alice")))
        .await
        .unwrap();

    let Json(auth) = login(
        State(pool.clone()),
        Json(LoginRequest {
            username: "alice".to_string(),
            password: "longenough".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(auth.user.id, registered.id);
    assert_eq!(auth.user.username, "alice");
    assert!(!auth.user.is_admin);

    let claims = verify_token(&auth.token).unwrap();
    assert_eq!(claims.sub, registered.id.to_string());
    assert_eq!(claims.username, "alice");

    // Login recorded the time.
    let user = get_user_by_id(&pool, registered.id).await.unwrap().unwrap();
    assert!(user.last_login.is_some());
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let pool = test_pool().await;

    register(State(pool.clone()), Json(registration("alice")))
        .await
        .unwrap();

    let err = register(State(pool.clone()), Json(registration("alice")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn register_rejects_invalid_input() {
    let pool = test_pool().await;

    // Username too short.
    let err = register(State(pool.clone()), Json(registration("ab")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    // Username starting with a digit.
    let err = register(State(pool.clone()), Json(registration("1alice")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    // Password too short.
    let mut request = registration("alice");
    request.password = "short".to_string();
    let err = register(State(pool.clone()), Json(request))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    // Email without an @.
    let mut request = registration("alice");
    request.email = "not-an-email".to_string();
    let err = register(State(pool.clone()), Json(request))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    // Blank display name.
    let mut request = registration("alice");
    request.display_name = "  ".to_string();
    let err = register(State(pool.clone()), Json(request))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let pool = test_pool().await;
    seed_user(&pool, "alice", "password1").await;

    let wrong_password = login(
        State(pool.clone()),
        Json(LoginRequest {
            username: "alice".to_string(),
            password: "password2".to_string(),
        }),
    )
    .await
    .unwrap_err();

    let unknown_user = login(
        State(pool.clone()),
        Json(LoginRequest {
            username: "mallory".to_string(),
            password: "password1".to_string(),
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(wrong_password, ApiError::Unauthorized(_)));
    assert!(matches!(unknown_user, ApiError::Unauthorized(_)));
    assert_eq!(wrong_password.message(), unknown_user.message());
}

#[tokio::test]
async fn profile_update_is_a_full_overwrite() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;

    update_profile(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Json(UpdateProfileRequest {
            display_name: "Alice A.".to_string(),
            bio: Some("studying databases".to_string()),
            interests: vec!["sql".to_string(), "rust".to_string()],
            avatar_url: Some("https://example.com/a.png".to_string()),
        }),
    )
    .await
    .unwrap();

    let Json(profile) = get_me(State(pool.clone()), AuthUser(identity(&alice)))
        .await
        .unwrap();
    assert_eq!(profile.display_name, "Alice A.");
    assert_eq!(profile.bio.as_deref(), Some("studying databases"));
    assert_eq!(profile.interests, vec!["sql", "rust"]);

    // Omitting fields clears them.
    update_profile(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Json(UpdateProfileRequest {
            display_name: "Alice A.".to_string(),
            bio: None,
            interests: vec![],
            avatar_url: None,
        }),
    )
    .await
    .unwrap();

    let Json(profile) = get_me(State(pool.clone()), AuthUser(identity(&alice)))
        .await
        .unwrap();
    assert_eq!(profile.bio, None);
    assert!(profile.interests.is_empty());
    assert_eq!(profile.avatar_url, None);
}

#[tokio::test]
async fn profile_update_rejects_blank_display_name() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;

    let err = update_profile(
        State(pool.clone()),
        AuthUser(identity(&alice)),
        Json(UpdateProfileRequest {
            display_name: "   ".to_string(),
            bio: None,
            interests: vec![],
            avatar_url: None,
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn corrupt_interests_read_back_as_empty() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice", "password1").await;

    sqlx::query("UPDATE users SET interests = 'not json' WHERE id = ?")
        .bind(alice.id)
        .execute(&pool)
        .await
        .unwrap();

    let Json(profile) = get_me(State(pool.clone()), AuthUser(identity(&alice)))
        .await
        .unwrap();
    assert!(profile.interests.is_empty());
}

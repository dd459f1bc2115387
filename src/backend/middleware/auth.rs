//! Authentication Middleware
//!
//! Protects routes that require a caller identity. The middleware extracts
//! the bearer token from the Authorization header, verifies it, confirms
//! the user still exists in the store, and attaches the identity to the
//! request for handlers to extract via [`AuthUser`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user identity resolved from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Authentication middleware
///
/// 1. Extracts the JWT from the Authorization header
/// 2. Verifies the token
/// 3. Confirms the user still exists in the store
/// 4. Attaches [`AuthenticatedUser`] to request extensions
///
/// Any failure is `Unauthorized`.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::unauthorized("missing Authorization header")
        })?;

    // Expected format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("invalid Authorization header format");
        ApiError::unauthorized("invalid Authorization header format")
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("invalid token: {:?}", e);
        ApiError::unauthorized("invalid token")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("malformed user ID in token: {:?}", e);
        ApiError::unauthorized("malformed token subject")
    })?;

    // The token may outlive the account; re-validate against the store.
    let user = get_user_by_id(&app_state.db, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("token subject not found: {}", user_id);
            ApiError::unauthorized("unknown user")
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter to pull the identity the middleware
/// attached to the request.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("missing authentication")
            })?;

        Ok(AuthUser(user))
    }
}

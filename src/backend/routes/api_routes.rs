//! API Route Table
//!
//! Two route groups: the public endpoints (register, login) and everything
//! else behind the authentication middleware.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::admin::{get_dashboard, list_all_users};
use crate::backend::auth::{get_me, login, register, update_profile};
use crate::backend::chat::{list_messages, send_message};
use crate::backend::friends;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure all API routes
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login));

    let protected = Router::new()
        .route("/api/profile", get(get_me))
        .route("/api/profile", put(update_profile))
        .route("/api/friends", get(friends::list_friends))
        .route("/api/friends/request", post(friends::send_friend_request))
        .route("/api/friends/requests", get(friends::list_friend_requests))
        .route(
            "/api/friends/accept/{request_id}",
            post(friends::accept_friend_request),
        )
        .route("/api/chat/messages", get(list_messages))
        .route("/api/chat/send", post(send_message))
        .route("/api/admin/dashboard", get(get_dashboard))
        .route("/api/admin/users", get(list_all_users))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

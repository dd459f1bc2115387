//! Backend Server
//!
//! Axum HTTP server: authentication, friendship graph, messaging gateway,
//! and admin aggregation over a SQLite store.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod error;
pub mod friends;
pub mod middleware;
pub mod routes;
pub mod server;

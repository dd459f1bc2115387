//! StudyPulse - Main Library
//!
//! StudyPulse is a social-networking backend for students, providing user
//! registration and login, friend requests, friendship state, and
//! direct/group messaging backed by SQLite.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between handlers and clients
//!   - Request/response DTOs
//!   - Friendship and chat domain enums
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with JWT authentication
//!   - Friendship graph and messaging gateway
//!   - Admin aggregation endpoints
//!   - SQLite persistence via sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use studypulse::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = create_app().await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

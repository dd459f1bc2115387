//! HTTP Routes
//!
//! API route tables and the top-level router.

pub mod api_routes;
pub mod router;

pub use router::create_router;

//! Backend Error Handling
//!
//! Defines the error taxonomy used by all HTTP handlers and its conversion
//! into HTTP responses.

pub mod conversion;
pub mod types;

pub use types::ApiError;

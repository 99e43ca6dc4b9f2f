//! Middleware for the user API
//!
//! Request logging wraps dispatch; handlers never log transport details.

mod tracing;

pub use tracing::request_tracing;

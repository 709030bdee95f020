//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can modify the request/response or short-circuit it entirely.

/// Redirects plain HTTP requests to HTTPS when enabled
pub mod https;

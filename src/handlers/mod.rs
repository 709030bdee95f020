//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, headers)
//! 2. Checks preconditions and calls the account store
//! 3. Returns HTTP response (JSON, status code)

use crate::error::AppError;

/// Account management endpoints
pub mod accounts;
/// Health and metadata endpoints
pub mod health;

/// Fallback for paths that match no route.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Validation Errors**: A required account field is missing or has the wrong type
/// - **Type Errors**: The request body is valid JSON but not an object
/// - **Media Type Errors**: A write endpoint received a non-JSON content type
/// - **Resource Errors**: Requested account or route does not exist
/// - **Routing Errors**: The path exists but not for this HTTP method
/// - **Storage Errors**: Any sqlx::Error from database operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Returns HTTP 500. The underlying error is logged, never sent to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body could not be turned into an account.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    Validation(String),

    /// Request body is JSON but not an object, so fields cannot be read one by one.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    TypeMismatch(String),

    /// `Content-Type` header did not match the expected media type.
    ///
    /// Returns HTTP 415 Unsupported Media Type.
    #[error("Content-Type must be {0}")]
    UnsupportedMediaType(&'static str),

    /// No account for the requested id on a read.
    ///
    /// Returns HTTP 404 with `{"message": "No account found."}`.
    #[error("No account found.")]
    NoAccountFound,

    /// No account for the requested id on an update or delete.
    ///
    /// Returns HTTP 404 with `{"error": "Account not found."}`.
    #[error("Account not found.")]
    AccountNotFound,

    /// No route matches the request path.
    #[error("The requested URL was not found on the server.")]
    RouteNotFound,

    /// The path exists but does not accept this HTTP method.
    ///
    /// Returns HTTP 405 Method Not Allowed.
    #[error("The method is not allowed for the requested URL.")]
    MethodNotAllowed,
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// Most errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// The two account lookup failures keep their historical flat bodies:
/// `{"message": "No account found."}` for reads and
/// `{"error": "Account not found."}` for updates and deletes.
///
/// # Status Code Mapping
///
/// - `Validation`, `TypeMismatch` → 400 Bad Request
/// - `NoAccountFound`, `AccountNotFound`, `RouteNotFound` → 404 Not Found
/// - `MethodNotAllowed` → 405 Method Not Allowed
/// - `UnsupportedMediaType` → 415 Unsupported Media Type
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NoAccountFound => {
                return (StatusCode::NOT_FOUND, Json(json!({ "message": self.to_string() })))
                    .into_response();
            }
            AppError::AccountNotFound => {
                return (StatusCode::NOT_FOUND, Json(json!({ "error": self.to_string() })))
                    .into_response();
            }
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::TypeMismatch(ref msg) => {
                (StatusCode::BAD_REQUEST, "type_mismatch", msg.clone())
            }
            AppError::UnsupportedMediaType(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media_type",
                self.to_string(),
            ),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                self.to_string(),
            ),
            AppError::Database(ref err) => {
                tracing::error!("Storage failure: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /accounts - Create new account
//! - GET /accounts - List all accounts
//! - GET /accounts/{id} - Get account by ID
//! - PUT /accounts/{id} - Replace an account's fields
//! - DELETE /accounts/{id} - Delete an account

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{HeaderMap, StatusCode, header, request::Parts},
};
use serde_json::Value;

use crate::{
    app::AppState,
    error::AppError,
    models::account::{Account, AccountPayload, today},
};

/// Media type accepted by write endpoints.
const JSON_MEDIA_TYPE: &str = "application/json";

/// Account id taken from the `{id}` path segment.
///
/// Only plain decimal digits are accepted. Anything else (negative numbers,
/// signs, letters) is treated as a path that does not exist and yields 404.
#[derive(Debug, Clone, Copy)]
pub struct AccountId(pub i64);

impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RouteNotFound)?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::RouteNotFound);
        }

        raw.parse::<i64>()
            .map(AccountId)
            .map_err(|_| AppError::RouteNotFound)
    }
}

/// Create a new account.
///
/// # Endpoint
///
/// `POST /accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Joe",
///   "email": "joe@x.com",
///   "address": "1 Rd",
///   "phone_number": "555-1111"   // optional
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account, `Location: /accounts/{id}`
/// - **Error (415)**: `Content-Type` is not exactly `application/json`
/// - **Error (400)**: Malformed JSON or a required field is missing
/// - **Error (500)**: Database error
///
/// The content type is checked before the body is looked at.
pub async fn create_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Account>), AppError> {
    tracing::info!("Request to create an Account");
    check_content_type(&headers, JSON_MEDIA_TYPE)?;

    let payload = parse_payload(&body)?;
    let account = state.store.create(payload.into_new_account(today())).await?;
    tracing::info!("Account with id [{}] created", account.id);

    let location = format!("/accounts/{}", account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

/// List all accounts.
///
/// # Endpoint
///
/// `GET /accounts`
///
/// # Response
///
/// - **Success (200 OK)**: Returns array of accounts (may be empty)
///
/// # Ordering
///
/// Whatever order the store returns; clients must not rely on it.
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    tracing::info!("Request to get all Accounts");

    let accounts = state.store.list_all().await?;

    Ok(Json(accounts))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (404)**: `{"message": "No account found."}`
pub async fn get_account(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<Json<Account>, AppError> {
    tracing::debug!("Retrieving an account with {}", account_id);

    let account = state
        .store
        .find(account_id)
        .await?
        .ok_or(AppError::NoAccountFound)?;

    Ok(Json(account))
}

/// Replace the fields of an existing account.
///
/// The account must exist before the body is parsed, so a PUT to a missing
/// id answers 404 whatever it carries.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the updated account
/// - **Error (404)**: `{"error": "Account not found."}`
/// - **Error (400)**: Malformed JSON or a required field is missing
pub async fn update_account(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    body: Bytes,
) -> Result<Json<Account>, AppError> {
    tracing::debug!("Request to update an account with account_id: {}", account_id);

    let mut account = state
        .store
        .find(account_id)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    account.apply(parse_payload(&body)?, today());
    let account = state.store.update(&account).await?;

    Ok(Json(account))
}

/// Delete an account.
///
/// # Response
///
/// - **Success (204 No Content)**: Empty body
/// - **Error (404)**: `{"error": "Account not found."}`
pub async fn delete_account(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<StatusCode, AppError> {
    tracing::debug!("Request to remove an account with account_id: {}", account_id);

    state
        .store
        .find(account_id)
        .await?
        .ok_or(AppError::AccountNotFound)?;
    state.store.delete(account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Check that the request declares exactly `media_type`.
///
/// Comparison is byte-for-byte: `application/json; charset=utf-8` or
/// `Application/JSON` are rejected.
fn check_content_type(headers: &HeaderMap, media_type: &'static str) -> Result<(), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok());

    if content_type == Some(media_type) {
        return Ok(());
    }

    tracing::error!("Invalid Content-Type: {:?}", content_type);
    Err(AppError::UnsupportedMediaType(media_type))
}

/// Parse a request body into an account payload.
fn parse_payload(body: &[u8]) -> Result<AccountPayload, AppError> {
    let record: Value = serde_json::from_slice(body)
        .map_err(|err| AppError::Validation(format!("Invalid JSON: {err}")))?;

    AccountPayload::deserialize_record(record)
}

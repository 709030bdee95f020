//! Account persistence.
//!
//! Handlers only talk to the [`AccountStore`] trait. Two backends implement it:
//! - [`PgAccountStore`]: PostgreSQL through a sqlx pool
//! - [`MemoryAccountStore`]: process-local map, used when no database is configured and in tests

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::account::{Account, NewAccount},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// Create, read, update and delete operations on stored accounts.
///
/// Implementations own id assignment: an id is handed out once by `create`
/// and never reused, even after the account is deleted.
///
/// Concurrent writes to the same id are resolved by the backend alone.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account and return it with its assigned id.
    async fn create(&self, account: NewAccount) -> Result<Account, AppError>;

    /// Point lookup by primary key. `Ok(None)` when no row matches.
    async fn find(&self, id: i64) -> Result<Option<Account>, AppError>;

    /// Every stored account. Order is whatever the backend returns.
    async fn list_all(&self) -> Result<Vec<Account>, AppError>;

    /// Write the account's fields over the row with the same id.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the row disappeared after the caller checked for it
    async fn update(&self, account: &Account) -> Result<Account, AppError>;

    /// Remove the row with this id. Removing a missing id is not an error.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

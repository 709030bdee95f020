//! PostgreSQL account store.
//!
//! Every method runs a single statement on a pooled connection; the
//! connection goes back to the pool as soon as the statement finishes.

use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::AppError,
    models::account::{Account, NewAccount},
};

use super::AccountStore;

/// Account store backed by the `accounts` table.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AppError> {
        // id comes from the BIGSERIAL sequence, which never hands out a value twice
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, address, phone_number, date_joined)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(account.name)
        .bind(account.email)
        .bind(account.address)
        .bind(account.phone_number)
        .bind(account.date_joined)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find(&self, id: i64) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn list_all(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number, date_joined FROM accounts",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn update(&self, account: &Account) -> Result<Account, AppError> {
        let updated = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = $1,
                email = $2,
                address = $3,
                phone_number = $4,
                date_joined = $5
            WHERE id = $6
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .bind(account.id)
        .fetch_optional(&self.pool)
        .await?
        // Deleted between the caller's lookup and this statement
        .ok_or(AppError::AccountNotFound)?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

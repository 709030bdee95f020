//! In-memory account store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::account::{Account, NewAccount},
};

use super::AccountStore;

#[derive(Debug, Default)]
struct Inner {
    accounts: BTreeMap<i64, Account>,
    /// Last id handed out. Only ever grows, so deleted ids are not reused.
    last_id: i64,
}

/// Account store that keeps rows in a process-local map.
///
/// Ids start at 1 and increase by one per `create`, like a database sequence.
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let account = account.with_id(inner.last_id);
        inner.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find(&self, id: i64) -> Result<Option<Account>, AppError> {
        Ok(self.inner.read().await.accounts.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }

    async fn update(&self, account: &Account) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .accounts
            .get_mut(&account.id)
            .ok_or(AppError::AccountNotFound)?;
        *stored = account.clone();
        Ok(account.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.inner.write().await.accounts.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_account(name: &str) -> NewAccount {
        NewAccount {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            address: "1 Rd".to_string(),
            phone_number: None,
            date_joined: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = MemoryAccountStore::new();

        let first = store.create(new_account("Joe")).await.unwrap();
        let second = store.create(new_account("Ann")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.name, "Ann");
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = MemoryAccountStore::new();

        let first = store.create(new_account("Joe")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create(new_account("Ann")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.find(first.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_all_returns_every_account() {
        let store = MemoryAccountStore::new();
        assert!(store.list_all().await.unwrap().is_empty());

        for name in ["Joe", "Ann", "Bo"] {
            store.create(new_account(name)).await.unwrap();
        }

        let mut ids: Vec<i64> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_overwrites_stored_row() {
        let store = MemoryAccountStore::new();
        let mut account = store.create(new_account("Joe")).await.unwrap();

        account.name = "French Fries".to_string();
        store.update(&account).await.unwrap();

        let stored = store.find(account.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "French Fries");
    }

    #[tokio::test]
    async fn update_of_missing_row_changes_nothing() {
        let store = MemoryAccountStore::new();
        store.create(new_account("Joe")).await.unwrap();

        let ghost = new_account("Ghost").with_id(42);
        assert!(matches!(
            store.update(&ghost).await,
            Err(AppError::AccountNotFound)
        ));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
        assert_eq!(store.find(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_of_missing_row_is_ok() {
        let store = MemoryAccountStore::new();
        assert!(store.delete(5).await.is_ok());
    }
}

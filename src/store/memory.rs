//! In-process profile store for tests and local embedding.

use super::ProfileStore;
use crate::error::AppError;
use crate::model::ChildProfile;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Map keyed by id with the same uniqueness rule as the table's primary key.
#[derive(Default)]
pub struct MemoryProfileStore {
    rows: RwLock<HashMap<String, ChildProfile>>,
    unavailable: AtomicBool,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the pool were closed.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn fetch(&self, id: &str) -> Result<Option<ChildProfile>, AppError> {
        self.check_available()?;
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn insert(&self, profile: &ChildProfile) -> Result<(), AppError> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        if rows.contains_key(&profile.id) {
            return Err(AppError::Conflict(format!(
                "child profile '{}' already exists",
                profile.id
            )));
        }
        rows.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> ChildProfile {
        ChildProfile {
            id: id.into(),
            given_name: "Ana".into(),
            middle_name: None,
            family_name: "Lee".into(),
            birth_date: "2020-01-01".into(),
        }
    }

    #[tokio::test]
    async fn duplicate_id_is_a_conflict() {
        let store = MemoryProfileStore::new();
        store.insert(&profile("a")).await.unwrap();
        let err = store.insert(&profile("a")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryProfileStore::new();
        store.set_unavailable(true);
        assert_eq!(store.fetch("a").await.unwrap_err().code(), "STORE_UNAVAILABLE");
        assert!(store.insert(&profile("a")).await.is_err());
        assert!(store.ping().await.is_err());
        assert!(store.is_empty().await);
    }
}

//! Fetch and create, one store call each.

use super::validation::parse_profile_id;
use crate::error::AppError;
use crate::model::{ChildProfile, NewChildProfile};
use crate::store::ProfileStore;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        ProfileService { store }
    }

    /// Fetch one profile. A zero-row lookup is [`AppError::NotFound`], kept apart from store failures.
    pub async fn get(&self, raw_id: &str) -> Result<ChildProfile, AppError> {
        let id = parse_profile_id(raw_id)?;
        tracing::debug!(%id, "fetching child profile");
        match self.store.fetch(&id).await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(AppError::NotFound(format!("child profile '{}'", id))),
            Err(e) => {
                tracing::warn!(%id, error = %e, "child profile lookup failed");
                Err(e)
            }
        }
    }

    /// Assign a fresh id, insert, and return exactly what was written.
    pub async fn create(&self, input: NewChildProfile) -> Result<ChildProfile, AppError> {
        let profile = input.into_profile(Uuid::new_v4());
        if let Err(e) = self.store.insert(&profile).await {
            tracing::warn!(id = %profile.id, error = %e, "child profile insert failed");
            return Err(e);
        }
        tracing::info!(id = %profile.id, "created child profile");
        Ok(profile)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}

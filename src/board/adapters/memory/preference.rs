//! In-memory column preference repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ColumnPreference, OwnerId},
    ports::{
        ColumnPreferenceRepository, ColumnPreferenceRepositoryError,
        ColumnPreferenceRepositoryResult,
    },
};

/// Thread-safe in-memory column preference repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryColumnPreferenceRepository {
    state: Arc<RwLock<HashMap<OwnerId, ColumnPreference>>>,
}

impl InMemoryColumnPreferenceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ColumnPreferenceRepositoryError {
    ColumnPreferenceRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ColumnPreferenceRepository for InMemoryColumnPreferenceRepository {
    async fn store(&self, preference: &ColumnPreference) -> ColumnPreferenceRepositoryResult<()> {
        let mut preferences = self.state.write().map_err(lock_error)?;
        if preferences.contains_key(&preference.user_id()) {
            return Err(ColumnPreferenceRepositoryError::DuplicateUser(
                preference.user_id(),
            ));
        }
        preferences.insert(preference.user_id(), preference.clone());
        Ok(())
    }

    async fn find(
        &self,
        user_id: OwnerId,
    ) -> ColumnPreferenceRepositoryResult<Option<ColumnPreference>> {
        let preferences = self.state.read().map_err(lock_error)?;
        Ok(preferences.get(&user_id).cloned())
    }

    async fn update(&self, preference: &ColumnPreference) -> ColumnPreferenceRepositoryResult<()> {
        let mut preferences = self.state.write().map_err(lock_error)?;
        let stored = preferences
            .get_mut(&preference.user_id())
            .ok_or(ColumnPreferenceRepositoryError::NotFound(
                preference.user_id(),
            ))?;
        *stored = preference.clone();
        Ok(())
    }
}

//! Repository port for per-user column preferences.

use crate::board::domain::{ColumnPreference, OwnerId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for column preference repository operations.
pub type ColumnPreferenceRepositoryResult<T> = Result<T, ColumnPreferenceRepositoryError>;

/// Column preference persistence contract.
#[async_trait]
pub trait ColumnPreferenceRepository: Send + Sync {
    /// Stores the preference of a user seen for the first time.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnPreferenceRepositoryError::DuplicateUser`] when the
    /// user already has a stored preference.
    async fn store(&self, preference: &ColumnPreference) -> ColumnPreferenceRepositoryResult<()>;

    /// Finds the preference of `user_id`.
    ///
    /// Returns `None` when the user has no stored preference.
    async fn find(
        &self,
        user_id: OwnerId,
    ) -> ColumnPreferenceRepositoryResult<Option<ColumnPreference>>;

    /// Persists a changed column order.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnPreferenceRepositoryError::NotFound`] when the user has
    /// no stored preference.
    async fn update(&self, preference: &ColumnPreference) -> ColumnPreferenceRepositoryResult<()>;
}

/// Errors returned by column preference repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ColumnPreferenceRepositoryError {
    /// The user already has a stored preference.
    #[error("duplicate column preference for user: {0}")]
    DuplicateUser(OwnerId),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(OwnerId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ColumnPreferenceRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

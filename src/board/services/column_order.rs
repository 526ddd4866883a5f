//! Per-user column order updates.

use super::BoardErrorKind;
use crate::board::{
    domain::{BoardDomainError, ColumnOrder, ColumnPreference, ColumnSlot, OwnerId, TaskStatus},
    ports::{ColumnPreferenceRepository, ColumnPreferenceRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for column order operations.
#[derive(Debug, Error)]
pub enum ColumnOrderError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ColumnPreferenceRepositoryError),
    /// The user has no stored column preference.
    #[error("no column preference stored for user {0}")]
    NotFound(OwnerId),
}

impl ColumnOrderError {
    /// Classifies the error for the caller.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::Domain(_) => BoardErrorKind::Validation,
            Self::NotFound(_)
            | Self::Repository(ColumnPreferenceRepositoryError::NotFound(_)) => {
                BoardErrorKind::NotFound
            }
            Self::Repository(_) => BoardErrorKind::StoreFailure,
        }
    }
}

/// Result type for column order service operations.
pub type ColumnOrderResult<T> = Result<T, ColumnOrderError>;

/// Column order service.
#[derive(Clone)]
pub struct ColumnOrderService<U, C>
where
    U: ColumnPreferenceRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<U>,
    clock: Arc<C>,
}

impl<U, C> ColumnOrderService<U, C>
where
    U: ColumnPreferenceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new column order service.
    #[must_use]
    pub const fn new(repository: Arc<U>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the user's stored order, or the default order when none is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnOrderError::Repository`] when persistence lookup fails.
    pub async fn column_order(&self, owner: OwnerId) -> ColumnOrderResult<ColumnOrder> {
        Ok(self
            .repository
            .find(owner)
            .await?
            .map_or_else(ColumnOrder::default, |preference| preference.order()))
    }

    /// Returns the user's preference, storing the default order on first
    /// use.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnOrderError::Repository`] when persistence fails.
    pub async fn ensure_preference(&self, owner: OwnerId) -> ColumnOrderResult<ColumnPreference> {
        if let Some(existing) = self.repository.find(owner).await? {
            return Ok(existing);
        }
        let preference = ColumnPreference::new(owner, &*self.clock);
        self.repository.store(&preference).await?;
        info!(owner = %owner, "stored default column order");
        Ok(preference)
    }

    /// Moves the column showing `status` into `destination`.
    ///
    /// The other two columns keep their relative order. Dropping a column
    /// onto its own slot returns the stored order without writing.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnOrderError::NotFound`] when the user has no stored
    /// preference, or [`ColumnOrderError::Repository`] when persistence
    /// fails.
    pub async fn update_column_order(
        &self,
        owner: OwnerId,
        status: TaskStatus,
        destination: ColumnSlot,
    ) -> ColumnOrderResult<ColumnOrder> {
        let mut preference = self
            .repository
            .find(owner)
            .await?
            .ok_or(ColumnOrderError::NotFound(owner))?;
        let current = preference.order();

        let Some(updated) = current.move_column(status, destination) else {
            debug!(owner = %owner, status = %status, "column dropped onto its own slot");
            return Ok(current);
        };

        preference.apply_order(updated, &*self.clock);
        self.repository.update(&preference).await?;
        info!(
            owner = %owner,
            status = %status,
            destination = %destination,
            order = ?updated.ordinals(),
            "updated column order"
        );
        Ok(updated)
    }

    /// Moves the column showing `status` to the raw destination position
    /// `0..=2`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidColumnSlot`] for positions outside
    /// `0..=2`, otherwise as [`Self::update_column_order`].
    pub async fn update_column_order_at(
        &self,
        owner: OwnerId,
        status: TaskStatus,
        destination: usize,
    ) -> ColumnOrderResult<ColumnOrder> {
        let slot = ColumnSlot::try_from(destination)?;
        self.update_column_order(owner, status, slot).await
    }
}

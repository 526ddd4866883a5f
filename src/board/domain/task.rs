//! Task aggregate root.

use super::{
    BoardDomainError, ImageUrl, IndexDelta, OwnerId, TaskId, TaskIndex, TaskStatus, TaskTitle,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task sits at `index` inside the column identified by its owner and
/// status. Soft-deleted tasks keep their row but leave every column view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: OwnerId,
    title: TaskTitle,
    status: TaskStatus,
    index: TaskIndex,
    image: Option<ImageUrl>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owner of the task.
    pub owner_id: OwnerId,
    /// Validated title.
    pub title: TaskTitle,
    /// Column the task is created in.
    pub status: TaskStatus,
    /// Position inside the column.
    pub index: TaskIndex,
    /// Hosted image, if any.
    pub image: Option<ImageUrl>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner_id: OwnerId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted column position.
    pub index: TaskIndex,
    /// Persisted image URL, if any.
    pub image: Option<ImageUrl>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted soft-deletion timestamp, if any.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task.
    #[must_use]
    pub fn new(new_task: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner_id: new_task.owner_id,
            title: new_task.title,
            status: new_task.status,
            index: new_task.index,
            image: new_task.image,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            status: data.status,
            index: data.index,
            image: data.image,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the column status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the position inside the column.
    #[must_use]
    pub const fn index(&self) -> TaskIndex {
        self.index
    }

    /// Returns the hosted image URL, if any.
    #[must_use]
    pub const fn image(&self) -> Option<&ImageUrl> {
        self.image.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the soft-deletion timestamp, if any.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns whether the task has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether `owner` can see this task on their board.
    #[must_use]
    pub fn is_visible_to(&self, owner: OwnerId) -> bool {
        self.owner_id == owner && !self.is_deleted()
    }

    /// Moves the task to `index` inside its current column.
    pub fn reposition(&mut self, index: TaskIndex, clock: &impl Clock) {
        self.index = index;
        self.touch(clock);
    }

    /// Moves the task to `index` inside the `status` column.
    pub fn relocate(&mut self, status: TaskStatus, index: TaskIndex, clock: &impl Clock) {
        self.status = status;
        self.index = index;
        self.touch(clock);
    }

    /// Shifts the task one slot in `delta`'s direction.
    ///
    /// Used when a sibling opens or closes a gap; the shifted task's
    /// `updated_at` is left alone.
    pub const fn shift(&mut self, delta: IndexDelta) {
        self.index = self.index.shifted(delta);
    }

    /// Marks the task as deleted without removing it.
    ///
    /// Sibling indices are left untouched; the gap only closes through a
    /// later reorder or move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskAlreadyDeleted`] when the task is
    /// already soft-deleted.
    pub fn soft_delete(&mut self, clock: &impl Clock) -> Result<(), BoardDomainError> {
        if self.is_deleted() {
            return Err(BoardDomainError::TaskAlreadyDeleted(self.id));
        }
        let timestamp = clock.utc();
        self.deleted_at = Some(timestamp);
        self.updated_at = timestamp;
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

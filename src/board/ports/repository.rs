//! Repository port for task persistence and column index maintenance.

use super::{IndexShift, TaskFilter};
use crate::board::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each method is applied atomically by the store. Nothing groups several
/// calls into one transaction, so a multi-step reorder can be observed half
/// applied if a call in the middle fails.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (status, index, deletion,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier, deleted or not.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks selected by `filter`, ordered by status ordinal and
    /// then by index ascending.
    async fn find_tasks(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts the tasks selected by `filter`.
    async fn count(&self, filter: &TaskFilter) -> TaskRepositoryResult<usize>;

    /// Moves every task selected by the shift's filter one position in the
    /// shift's direction, returning the number of tasks touched.
    ///
    /// The selected tasks hold disjoint positions, so the store may apply the
    /// individual writes in any order.
    async fn shift_indices(&self, shift: &IndexShift) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

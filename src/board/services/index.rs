//! Dense per-column index maintenance for tasks.
//!
//! Every live task of one owner and status holds a distinct position in
//! `0..n`. Creating appends, reordering shifts the tasks between the old and
//! new position by one slot, and moving across columns closes the gap in the
//! source column before inserting into the destination.
//!
//! Each step is its own store call and nothing locks the column in between,
//! so two requests racing on the same column can leave duplicate or missing
//! positions behind.

use super::BoardErrorKind;
use crate::board::{
    domain::{
        BoardDomainError, ImageUrl, NewTask, OwnerId, Task, TaskId, TaskIndex, TaskStatus,
        TaskTitle,
    },
    ports::{IndexRange, IndexShift, TaskFilter, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task at the end of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    owner: OwnerId,
    title: String,
    status: TaskStatus,
    image_url: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request without an image.
    #[must_use]
    pub fn new(owner: OwnerId, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            owner,
            title: title.into(),
            status,
            image_url: None,
        }
    }

    /// Attaches an already hosted image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Request payload for moving a task inside its own column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderTaskRequest {
    /// Caller identity.
    pub owner: OwnerId,
    /// Task to move.
    pub task_id: TaskId,
    /// Destination position inside the column.
    pub new_index: u32,
}

impl ReorderTaskRequest {
    /// Creates a reorder request.
    #[must_use]
    pub const fn new(owner: OwnerId, task_id: TaskId, new_index: u32) -> Self {
        Self {
            owner,
            task_id,
            new_index,
        }
    }
}

/// Request payload for moving a task into another column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTaskRequest {
    /// Caller identity.
    pub owner: OwnerId,
    /// Task to move.
    pub task_id: TaskId,
    /// Destination column.
    pub status: TaskStatus,
    /// Destination position inside that column.
    pub new_index: u32,
}

impl MoveTaskRequest {
    /// Creates a move request.
    #[must_use]
    pub const fn new(
        owner: OwnerId,
        task_id: TaskId,
        status: TaskStatus,
        new_index: u32,
    ) -> Self {
        Self {
            owner,
            task_id,
            status,
            new_index,
        }
    }
}

/// Service-level errors for task index operations.
#[derive(Debug, Error)]
pub enum TaskIndexError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No live task with the given identifier belongs to the caller.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

impl TaskIndexError {
    /// Classifies the error for the caller.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::Domain(_) => BoardErrorKind::Validation,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                BoardErrorKind::NotFound
            }
            Self::Repository(_) => BoardErrorKind::StoreFailure,
        }
    }
}

/// Result type for task index service operations.
pub type TaskIndexResult<T> = Result<T, TaskIndexError>;

/// Task index maintenance service.
#[derive(Clone)]
pub struct TaskIndexService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskIndexService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task index service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task at the end of its column.
    ///
    /// The new task's index is the number of live tasks already in the
    /// column; no other task moves.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexError::Domain`] when the title or image URL is
    /// invalid, or [`TaskIndexError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskIndexResult<Task> {
        let CreateTaskRequest {
            owner,
            title: raw_title,
            status,
            image_url,
        } = request;
        let title = TaskTitle::new(raw_title)?;
        let image = image_url.as_deref().map(ImageUrl::parse).transpose()?;
        let index = self.append_position(owner, status).await?;

        let task = Task::new(
            NewTask {
                owner_id: owner,
                title,
                status,
                index,
                image,
            },
            &*self.clock,
        );
        self.repository.store(&task).await?;
        info!(
            task_id = %task.id(),
            owner = %owner,
            status = %status,
            index = %index,
            "created task"
        );
        Ok(task)
    }

    /// Moves a task to `new_index` inside its current column.
    ///
    /// Asking for the task's current index changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexError::NotFound`] when the caller has no such live
    /// task, [`BoardDomainError::IndexOutOfRange`] when `new_index` is past
    /// the last task, or [`TaskIndexError::Repository`] when persistence
    /// fails.
    pub async fn reorder_task(&self, request: ReorderTaskRequest) -> TaskIndexResult<Task> {
        let task = self
            .find_active_task(request.owner, request.task_id)
            .await?;
        let target = TaskIndex::new(request.new_index);
        if task.index() == target {
            return Ok(task);
        }

        let len = self.append_position(request.owner, task.status()).await?;
        if target >= len {
            return Err(out_of_range(target, len).into());
        }

        self.place_within_column(task, target).await
    }

    /// Moves a task into another column at `new_index`.
    ///
    /// The task is first appended to the destination column and the gap it
    /// leaves in the source column is closed; it is then reordered within
    /// the destination. A move into the task's own column is a reorder.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexError::NotFound`] when the caller has no such live
    /// task, [`BoardDomainError::IndexOutOfRange`] when `new_index` is past
    /// the end of the destination column, or [`TaskIndexError::Repository`]
    /// when persistence fails.
    pub async fn move_task(&self, request: MoveTaskRequest) -> TaskIndexResult<Task> {
        let mut task = self
            .find_active_task(request.owner, request.task_id)
            .await?;
        if task.status() == request.status {
            debug!(task_id = %task.id(), "move stays in the same column, reordering instead");
            return self
                .reorder_task(ReorderTaskRequest::new(
                    request.owner,
                    request.task_id,
                    request.new_index,
                ))
                .await;
        }

        let target = TaskIndex::new(request.new_index);
        let appended = self.append_position(request.owner, request.status).await?;
        if target > appended {
            return Err(out_of_range(target, appended).into());
        }

        let source_status = task.status();
        let source_index = task.index();
        task.relocate(request.status, appended, &*self.clock);
        self.repository.update(&task).await?;

        let closed = self
            .repository
            .shift_indices(&IndexShift::close_gap(
                request.owner,
                source_status,
                IndexRange::starting_at(source_index.successor()),
                task.id(),
            ))
            .await?;
        debug!(
            task_id = %task.id(),
            column = %source_status,
            shifted = closed,
            "closed gap in source column"
        );

        let placed = self.place_within_column(task, target).await?;
        info!(
            task_id = %placed.id(),
            from = %source_status,
            to = %placed.status(),
            index = %placed.index(),
            "moved task across columns"
        );
        Ok(placed)
    }

    /// Marks a task as deleted.
    ///
    /// Siblings keep their indices, so the column may hold a gap until the
    /// next reorder or move touches it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexError::NotFound`] when the caller has no such live
    /// task, or [`TaskIndexError::Repository`] when persistence fails.
    pub async fn soft_delete_task(
        &self,
        owner: OwnerId,
        task_id: TaskId,
    ) -> TaskIndexResult<Task> {
        let mut task = self.find_active_task(owner, task_id).await?;
        task.soft_delete(&*self.clock)?;
        self.repository.update(&task).await?;
        info!(task_id = %task_id, owner = %owner, "soft-deleted task");
        Ok(task)
    }

    /// Lists the caller's live tasks, grouped by status ordinal and sorted by
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexError::Repository`] when persistence lookup fails.
    pub async fn list_tasks(&self, owner: OwnerId) -> TaskIndexResult<Vec<Task>> {
        Ok(self
            .repository
            .find_tasks(&TaskFilter::for_owner(owner))
            .await?)
    }

    async fn find_active_task(&self, owner: OwnerId, task_id: TaskId) -> TaskIndexResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .filter(|task| task.is_visible_to(owner))
            .ok_or(TaskIndexError::NotFound(task_id))
    }

    /// Returns the position a task appended to the column would take.
    async fn append_position(
        &self,
        owner: OwnerId,
        status: TaskStatus,
    ) -> TaskIndexResult<TaskIndex> {
        let len = self
            .repository
            .count(&TaskFilter::column(owner, status))
            .await?;
        Ok(TaskIndex::from_len(len)?)
    }

    /// Shifts the siblings between the task's position and `target`, then
    /// writes the task at `target`.
    async fn place_within_column(
        &self,
        mut task: Task,
        target: TaskIndex,
    ) -> TaskIndexResult<Task> {
        let current = task.index();
        let shift = match current.cmp(&target) {
            Ordering::Equal => return Ok(task),
            Ordering::Greater => IndexShift::open_gap(
                task.owner_id(),
                task.status(),
                IndexRange::between(target, current.predecessor()),
                task.id(),
            ),
            Ordering::Less => IndexShift::close_gap(
                task.owner_id(),
                task.status(),
                IndexRange::between(current.successor(), target),
                task.id(),
            ),
        };

        let shifted = self.repository.shift_indices(&shift).await?;
        debug!(
            task_id = %task.id(),
            column = %task.status(),
            from = %current,
            to = %target,
            shifted,
            "shifted siblings"
        );

        task.reposition(target, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }
}

fn out_of_range(index: TaskIndex, len: TaskIndex) -> BoardDomainError {
    BoardDomainError::IndexOutOfRange {
        index: u64::from(index.value()),
        len: u64::from(len.value()),
    }
}

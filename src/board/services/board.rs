//! Board façade combining task indices, column order and image hosting.

use super::{
    BoardErrorKind, ColumnOrderError, ColumnOrderService, CreateTaskRequest, MoveTaskRequest,
    ReorderTaskRequest, TaskIndexError, TaskIndexService,
};
use crate::board::{
    domain::{
        Board, BoardDomainError, BoardSearch, ColumnOrder, ColumnPreference, ColumnSlot,
        DragLocation, DropOutcome, OwnerId, Task, TaskId, TaskStatus, TaskTitle,
    },
    ports::{ColumnPreferenceRepository, ImageHost, ImageUpload, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for creating a task, optionally with an image to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardTaskRequest {
    owner: OwnerId,
    title: String,
    status: TaskStatus,
    image: Option<ImageUpload>,
}

impl CreateBoardTaskRequest {
    /// Creates a request without an image.
    #[must_use]
    pub fn new(owner: OwnerId, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            owner,
            title: title.into(),
            status,
            image: None,
        }
    }

    /// Attaches an image to upload before the task is stored.
    #[must_use]
    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}

/// What [`BoardService::apply_drop`] did with a drag outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropEffect {
    /// The drop changed nothing.
    Ignored,
    /// A column was moved; carries the resulting order.
    ColumnsReordered(ColumnOrder),
    /// A task moved within its column.
    TaskReordered(Task),
    /// A task moved into another column.
    TaskMoved(Task),
}

/// Errors returned by the board façade.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Task index maintenance failed.
    #[error(transparent)]
    Tasks(#[from] TaskIndexError),
    /// Column order update failed.
    #[error(transparent)]
    Columns(#[from] ColumnOrderError),
    /// A task drag started from a position holding no task.
    #[error("no task at position {} in column slot {}", .0.position, .0.slot)]
    DropSourceMissing(DragLocation),
}

impl BoardServiceError {
    /// Classifies the error for the caller.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::Domain(_) => BoardErrorKind::Validation,
            Self::Tasks(err) => err.kind(),
            Self::Columns(err) => err.kind(),
            Self::DropSourceMissing(_) => BoardErrorKind::NotFound,
        }
    }
}

/// Result type for board façade operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Entry point for presentation layers.
pub struct BoardService<R, U, H, C>
where
    R: TaskRepository,
    U: ColumnPreferenceRepository,
    H: ImageHost,
    C: Clock + Send + Sync,
{
    tasks: TaskIndexService<R, C>,
    columns: ColumnOrderService<U, C>,
    images: Arc<H>,
}

impl<R, U, H, C> BoardService<R, U, H, C>
where
    R: TaskRepository,
    U: ColumnPreferenceRepository,
    H: ImageHost,
    C: Clock + Send + Sync,
{
    /// Creates a board service over the given adapters.
    #[must_use]
    pub fn new(tasks: Arc<R>, preferences: Arc<U>, images: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            tasks: TaskIndexService::new(tasks, Arc::clone(&clock)),
            columns: ColumnOrderService::new(preferences, clock),
            images,
        }
    }

    /// Returns the task index service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskIndexService<R, C> {
        &self.tasks
    }

    /// Returns the column order service.
    #[must_use]
    pub const fn columns(&self) -> &ColumnOrderService<U, C> {
        &self.columns
    }

    /// Stores the default column order for a user seen for the first time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Columns`] when persistence fails.
    pub async fn register_owner(&self, owner: OwnerId) -> BoardServiceResult<ColumnPreference> {
        Ok(self.columns.ensure_preference(owner).await?)
    }

    /// Lays out the caller's live tasks in their preferred column order.
    ///
    /// # Errors
    ///
    /// Returns an error when either store lookup fails.
    pub async fn get_board(
        &self,
        owner: OwnerId,
        search: &BoardSearch,
    ) -> BoardServiceResult<Board> {
        let order = self.columns.column_order(owner).await?;
        let tasks = self.tasks.list_tasks(owner).await?;
        Ok(Board::from_tasks(tasks, order, search))
    }

    /// Creates a task at the end of its column, uploading its image first.
    ///
    /// A failed upload is logged and the task is created without an image.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] for an invalid title before anything is
    /// uploaded, or [`BoardServiceError::Tasks`] when storing fails.
    pub async fn create_task(&self, request: CreateBoardTaskRequest) -> BoardServiceResult<Task> {
        let CreateBoardTaskRequest {
            owner,
            title: raw_title,
            status,
            image,
        } = request;
        let title = TaskTitle::new(raw_title)?;

        let mut create = CreateTaskRequest::new(owner, title.as_str(), status);
        if let Some(upload) = image {
            match self.images.upload(&upload).await {
                Ok(hosted) => create = create.with_image_url(hosted.url.as_str()),
                Err(err) => {
                    warn!(
                        owner = %owner,
                        content_type = upload.content_type(),
                        error = %err,
                        "image upload failed, creating task without image"
                    );
                }
            }
        }

        Ok(self.tasks.create_task(create).await?)
    }

    /// Soft-deletes one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Tasks`] when the task is missing or the
    /// store fails.
    pub async fn soft_delete_task(
        &self,
        owner: OwnerId,
        task_id: TaskId,
    ) -> BoardServiceResult<Task> {
        Ok(self.tasks.soft_delete_task(owner, task_id).await?)
    }

    /// Moves a task within its column.
    ///
    /// # Errors
    ///
    /// See [`TaskIndexService::reorder_task`].
    pub async fn reorder_task(&self, request: ReorderTaskRequest) -> BoardServiceResult<Task> {
        Ok(self.tasks.reorder_task(request).await?)
    }

    /// Moves a task into another column.
    ///
    /// # Errors
    ///
    /// See [`TaskIndexService::move_task`].
    pub async fn move_task(&self, request: MoveTaskRequest) -> BoardServiceResult<Task> {
        Ok(self.tasks.move_task(request).await?)
    }

    /// Moves the column showing `status` into `destination`.
    ///
    /// # Errors
    ///
    /// See [`ColumnOrderService::update_column_order`].
    pub async fn update_column_order(
        &self,
        owner: OwnerId,
        status: TaskStatus,
        destination: ColumnSlot,
    ) -> BoardServiceResult<ColumnOrder> {
        Ok(self
            .columns
            .update_column_order(owner, status, destination)
            .await?)
    }

    /// Applies the outcome of a drag gesture.
    ///
    /// Slots and positions refer to the board as displayed: slots follow the
    /// caller's column order and positions count the live tasks of a column
    /// sorted by index. Drops outside any target, and drops back onto the
    /// starting point, are ignored.
    ///
    /// The destination position is used as the stored index unchanged. After
    /// a soft delete leaves a gap, displayed positions and stored indices
    /// disagree, so a drop can land one slot off or leave the displayed
    /// order as it was until a reorder closes the gap.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::DropSourceMissing`] when no task sits at
    /// the drag source, otherwise as the routed operation.
    pub async fn apply_drop(
        &self,
        owner: OwnerId,
        outcome: DropOutcome,
    ) -> BoardServiceResult<DropEffect> {
        match outcome {
            DropOutcome::Column {
                destination: None, ..
            }
            | DropOutcome::Task {
                destination: None, ..
            } => {
                debug!(owner = %owner, "drop outside any target");
                Ok(DropEffect::Ignored)
            }
            DropOutcome::Column {
                source,
                destination: Some(destination),
            } => self.drop_column(owner, source, destination).await,
            DropOutcome::Task {
                source,
                destination: Some(destination),
            } => self.drop_task(owner, source, destination).await,
        }
    }

    async fn drop_column(
        &self,
        owner: OwnerId,
        source: ColumnSlot,
        destination: ColumnSlot,
    ) -> BoardServiceResult<DropEffect> {
        if source == destination {
            return Ok(DropEffect::Ignored);
        }
        let status = self.columns.column_order(owner).await?.status_at(source);
        let order = self.update_column_order(owner, status, destination).await?;
        Ok(DropEffect::ColumnsReordered(order))
    }

    async fn drop_task(
        &self,
        owner: OwnerId,
        source: DragLocation,
        destination: DragLocation,
    ) -> BoardServiceResult<DropEffect> {
        if source == destination {
            return Ok(DropEffect::Ignored);
        }

        let board = self.get_board(owner, &BoardSearch::default()).await?;
        let task_id = board
            .column_at(source.slot)
            .and_then(|column| column.task_at(source.position))
            .map(Task::id)
            .ok_or(BoardServiceError::DropSourceMissing(source))?;
        let new_index = u32::try_from(destination.position).map_err(|_| {
            BoardDomainError::IndexOutOfRange {
                index: u64::try_from(destination.position).unwrap_or(u64::MAX),
                len: u64::from(u32::MAX),
            }
        })?;

        if source.slot == destination.slot {
            let task = self
                .reorder_task(ReorderTaskRequest::new(owner, task_id, new_index))
                .await?;
            return Ok(DropEffect::TaskReordered(task));
        }

        let status = board.order().status_at(destination.slot);
        let task = self
            .move_task(MoveTaskRequest::new(owner, task_id, status, new_index))
            .await?;
        Ok(DropEffect::TaskMoved(task))
    }
}

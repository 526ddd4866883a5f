//! Query and batch-update descriptors for task columns.

use crate::board::domain::{IndexDelta, OwnerId, Task, TaskId, TaskIndex, TaskStatus};

/// Inclusive range of column positions. An open end reaches the tail of the
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: TaskIndex,
    end: Option<TaskIndex>,
}

impl IndexRange {
    /// Positions `start..=end`.
    #[must_use]
    pub const fn between(start: TaskIndex, end: TaskIndex) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Positions `start..`.
    #[must_use]
    pub const fn starting_at(start: TaskIndex) -> Self {
        Self { start, end: None }
    }

    /// Returns the first position in the range.
    #[must_use]
    pub const fn start(self) -> TaskIndex {
        self.start
    }

    /// Returns the last position in the range, if bounded.
    #[must_use]
    pub const fn end(self) -> Option<TaskIndex> {
        self.end
    }

    /// Returns whether `index` falls inside the range.
    #[must_use]
    pub fn contains(self, index: TaskIndex) -> bool {
        index >= self.start && self.end.is_none_or(|end| index <= end)
    }
}

/// Selection of tasks belonging to one owner.
///
/// Soft-deleted tasks are excluded unless [`TaskFilter::including_deleted`]
/// is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskFilter {
    owner: OwnerId,
    status: Option<TaskStatus>,
    index_range: Option<IndexRange>,
    exclude: Option<TaskId>,
    include_deleted: bool,
}

impl TaskFilter {
    /// Selects every live task of `owner`.
    #[must_use]
    pub const fn for_owner(owner: OwnerId) -> Self {
        Self {
            owner,
            status: None,
            index_range: None,
            exclude: None,
            include_deleted: false,
        }
    }

    /// Selects the live tasks in one `(owner, status)` column.
    #[must_use]
    pub const fn column(owner: OwnerId, status: TaskStatus) -> Self {
        Self::for_owner(owner).with_status(status)
    }

    /// Restricts the selection to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the selection to a position range.
    #[must_use]
    pub const fn with_index_range(mut self, range: IndexRange) -> Self {
        self.index_range = Some(range);
        self
    }

    /// Leaves one task out of the selection.
    #[must_use]
    pub const fn excluding(mut self, task_id: TaskId) -> Self {
        self.exclude = Some(task_id);
        self
    }

    /// Keeps soft-deleted tasks in the selection.
    #[must_use]
    pub const fn including_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Returns the status restriction, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the position range restriction, if any.
    #[must_use]
    pub const fn index_range(&self) -> Option<IndexRange> {
        self.index_range
    }

    /// Returns the excluded task, if any.
    #[must_use]
    pub const fn exclude(&self) -> Option<TaskId> {
        self.exclude
    }

    /// Returns whether soft-deleted tasks are selected.
    #[must_use]
    pub const fn include_deleted(&self) -> bool {
        self.include_deleted
    }

    /// Returns whether `task` is selected.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.owner_id() == self.owner
            && (self.include_deleted || !task.is_deleted())
            && self.status.is_none_or(|status| task.status() == status)
            && self
                .index_range
                .is_none_or(|range| range.contains(task.index()))
            && self.exclude != Some(task.id())
    }
}

/// Batch update moving every selected task one position in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexShift {
    filter: TaskFilter,
    delta: IndexDelta,
}

impl IndexShift {
    /// Creates a shift of the tasks selected by `filter`.
    #[must_use]
    pub const fn new(filter: TaskFilter, delta: IndexDelta) -> Self {
        Self { filter, delta }
    }

    /// Opens a gap: tasks in `range` move one position later.
    #[must_use]
    pub const fn open_gap(
        owner: OwnerId,
        status: TaskStatus,
        range: IndexRange,
        moving: TaskId,
    ) -> Self {
        Self::new(
            TaskFilter::column(owner, status)
                .with_index_range(range)
                .excluding(moving),
            IndexDelta::Increment,
        )
    }

    /// Closes a gap: tasks in `range` move one position earlier.
    #[must_use]
    pub const fn close_gap(
        owner: OwnerId,
        status: TaskStatus,
        range: IndexRange,
        moving: TaskId,
    ) -> Self {
        Self::new(
            TaskFilter::column(owner, status)
                .with_index_range(range)
                .excluding(moving),
            IndexDelta::Decrement,
        )
    }

    /// Returns the selection to shift.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Returns the shift direction.
    #[must_use]
    pub const fn delta(&self) -> IndexDelta {
        self.delta
    }
}

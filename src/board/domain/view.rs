//! Derived board view: tasks grouped into columns in display order.

use super::{ColumnOrder, ColumnSlot, Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Case-insensitive title filter applied when building a board view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSearch {
    needle: Option<String>,
}

impl BoardSearch {
    /// Creates a filter from raw search box input. Blank input matches every
    /// task.
    #[must_use]
    pub fn new(query: impl AsRef<str>) -> Self {
        let trimmed = query.as_ref().trim();
        let needle = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        Self { needle }
    }

    /// Returns whether the filter accepts every task.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    /// Returns whether `task` passes the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.needle.as_deref().is_none_or(|needle| {
            task.title().as_str().to_lowercase().contains(needle)
        })
    }
}

/// One status column with its tasks sorted by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl Column {
    /// Returns the column status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the tasks in index order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task displayed at `position`, if any.
    #[must_use]
    pub fn task_at(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// A user's board: three columns laid out in their preferred order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    order: ColumnOrder,
    columns: Vec<Column>,
}

impl Board {
    /// Groups tasks into columns.
    ///
    /// Every status yields a column even when it has no tasks. Soft-deleted
    /// tasks and tasks rejected by `search` are dropped; the rest are sorted
    /// by index ascending.
    #[must_use]
    pub fn from_tasks(
        tasks: impl IntoIterator<Item = Task>,
        order: ColumnOrder,
        search: &BoardSearch,
    ) -> Self {
        let mut columns: Vec<Column> = order
            .statuses()
            .into_iter()
            .map(|status| Column {
                status,
                tasks: Vec::new(),
            })
            .collect();

        for task in tasks {
            if task.is_deleted() || !search.matches(&task) {
                continue;
            }
            if let Some(column) = columns
                .iter_mut()
                .find(|column| column.status == task.status())
            {
                column.tasks.push(task);
            }
        }

        for column in &mut columns {
            column.tasks.sort_by_key(Task::index);
        }

        Self { order, columns }
    }

    /// Returns the column order the board was laid out with.
    #[must_use]
    pub const fn order(&self) -> ColumnOrder {
        self.order
    }

    /// Returns the columns from left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column displayed at `slot`.
    #[must_use]
    pub fn column_at(&self, slot: ColumnSlot) -> Option<&Column> {
        self.columns.get(slot.position())
    }

    /// Returns the column holding `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&Column> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns all visible tasks in display order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|column| column.tasks.iter())
    }
}

//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Task, TaskId},
    ports::{IndexShift, TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn select(tasks: &HashMap<TaskId, Task>, filter: &TaskFilter) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .values()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect();
    selected.sort_by_key(|task| (task.status().ordinal(), task.index(), task.created_at()));
    selected
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_error)?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_error)?;
        let stored = tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(lock_error)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn find_tasks(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(lock_error)?;
        Ok(select(&tasks, filter))
    }

    async fn count(&self, filter: &TaskFilter) -> TaskRepositoryResult<usize> {
        let tasks = self.state.read().map_err(lock_error)?;
        Ok(tasks.values().filter(|task| filter.matches(task)).count())
    }

    async fn shift_indices(&self, shift: &IndexShift) -> TaskRepositoryResult<usize> {
        let mut tasks = self.state.write().map_err(lock_error)?;
        let mut shifted = 0;
        for task in tasks.values_mut().filter(|task| shift.filter().matches(task)) {
            task.shift(shift.delta());
            shifted += 1;
        }
        Ok(shifted)
    }
}

//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{OwnerId, Task, TaskStatus},
    services::{CreateTaskRequest, TaskIndexService},
};

/// Service type exercised by the integration tests.
pub type TestService = TaskIndexService<InMemoryTaskRepository, DefaultClock>;

/// Provides a service over a fresh in-memory repository.
#[fixture]
pub fn service() -> TestService {
    TaskIndexService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides an owner identity for tests.
#[fixture]
pub fn owner() -> OwnerId {
    OwnerId::new()
}

/// Creates one task per title at the end of `status`.
///
/// # Errors
///
/// Returns an error if any creation fails.
pub async fn seed_column(
    service: &TestService,
    owner: OwnerId,
    status: TaskStatus,
    titles: &[&str],
) -> Result<Vec<Task>, eyre::Report> {
    let mut created = Vec::with_capacity(titles.len());
    for title in titles {
        let task = service
            .create_task(CreateTaskRequest::new(owner, *title, status))
            .await?;
        created.push(task);
    }
    Ok(created)
}

/// Returns the titles of a column in index order.
///
/// # Errors
///
/// Returns an error if listing fails.
pub async fn column_titles(
    service: &TestService,
    owner: OwnerId,
    status: TaskStatus,
) -> Result<Vec<String>, eyre::Report> {
    Ok(service
        .list_tasks(owner)
        .await?
        .into_iter()
        .filter(|task| task.status() == status)
        .map(|task| task.title().as_str().to_owned())
        .collect())
}

/// Returns the sorted indices of a column.
///
/// # Errors
///
/// Returns an error if listing fails.
pub async fn column_indices(
    service: &TestService,
    owner: OwnerId,
    status: TaskStatus,
) -> Result<Vec<u32>, eyre::Report> {
    let mut indices: Vec<u32> = service
        .list_tasks(owner)
        .await?
        .into_iter()
        .filter(|task| task.status() == status)
        .map(|task| task.index().value())
        .collect();
    indices.sort_unstable();
    Ok(indices)
}

/// Finds a seeded task by title.
///
/// # Errors
///
/// Returns an error if no task has the title.
pub fn task_named<'a>(tasks: &'a [Task], title: &str) -> Result<&'a Task, eyre::Report> {
    tasks
        .iter()
        .find(|task| task.title().as_str() == title)
        .ok_or_else(|| eyre::eyre!("no seeded task titled {title}"))
}

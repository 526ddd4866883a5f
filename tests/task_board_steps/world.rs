//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{
        InMemoryColumnPreferenceRepository, InMemoryImageHost, InMemoryTaskRepository,
    },
    domain::{ColumnOrder, OwnerId, TaskId, TaskStatus},
    services::{BoardService, BoardServiceError},
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<
    InMemoryTaskRepository,
    InMemoryColumnPreferenceRepository,
    InMemoryImageHost,
    DefaultClock,
>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub owner: OwnerId,
    pub tasks_by_title: HashMap<String, TaskId>,
    pub last_order: Option<ColumnOrder>,
    pub last_error: Option<BoardServiceError>,
}

impl BoardWorld {
    /// Creates a world with a fresh board and owner.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryColumnPreferenceRepository::new()),
            Arc::new(InMemoryImageHost::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            owner: OwnerId::new(),
            tasks_by_title: HashMap::new(),
            last_order: None,
            last_error: None,
        }
    }

    /// Resolves a task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no task with `title` was created.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks_by_title
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title} in scenario world"))
    }

    /// Records the outcome of an operation whose value is not inspected.
    pub fn record<T>(&mut self, result: Result<T, BoardServiceError>) {
        if let Err(err) = result {
            self.last_error = Some(err);
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a status name from a step.
///
/// # Errors
///
/// Returns an error if the name is not a board column.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Splits a comma-separated list from a step.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

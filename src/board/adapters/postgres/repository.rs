//! `PostgreSQL` repository implementation for task storage.

use super::{
    blocking::{BoardPgPool, run_blocking},
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::board::{
    domain::{
        ImageUrl, OwnerId, PersistedTaskData, Task, TaskId, TaskIndex, TaskStatus, TaskTitle,
    },
    ports::{IndexShift, TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Bool;

/// Boxed `WHERE` clause over the `tasks` table.
type TaskPredicate = Box<dyn BoxableExpression<tasks::table, Pg, SqlType = Bool>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task)?;

        run_blocking(&self.pool, TaskRepositoryError::Persistence, move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task)?;

        run_blocking(&self.pool, TaskRepositoryError::Persistence, move |connection| {
            let updated = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        run_blocking(&self.pool, TaskRepositoryError::Persistence, move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_tasks(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let filter = *filter;
        run_blocking(&self.pool, TaskRepositoryError::Persistence, move |connection| {
            let rows = tasks::table
                .filter(filter_predicate(&filter)?)
                .order((tasks::position.asc(), tasks::created_at.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let mut found = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            found.sort_by_key(|task| task.status().ordinal());
            Ok(found)
        })
        .await
    }

    async fn count(&self, filter: &TaskFilter) -> TaskRepositoryResult<usize> {
        let filter = *filter;
        run_blocking(&self.pool, TaskRepositoryError::Persistence, move |connection| {
            let total = tasks::table
                .filter(filter_predicate(&filter)?)
                .select(count_star())
                .first::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            usize::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn shift_indices(&self, shift: &IndexShift) -> TaskRepositoryResult<usize> {
        let shift = *shift;
        run_blocking(&self.pool, TaskRepositoryError::Persistence, move |connection| {
            shift_positions(connection, &shift)
        })
        .await
    }
}

/// Applies a one-step shift to every selected row in a single statement.
fn shift_positions(
    connection: &mut PgConnection,
    shift: &IndexShift,
) -> TaskRepositoryResult<usize> {
    let step = shift.delta().step();
    diesel::update(tasks::table)
        .filter(filter_predicate(shift.filter())?)
        .set(tasks::position.eq(tasks::position + step))
        .execute(connection)
        .map_err(TaskRepositoryError::persistence)
}

fn filter_predicate(filter: &TaskFilter) -> TaskRepositoryResult<TaskPredicate> {
    let mut predicate: TaskPredicate = Box::new(tasks::owner_id.eq(filter.owner().into_inner()));
    if !filter.include_deleted() {
        predicate = Box::new(predicate.and(tasks::deleted_at.is_null()));
    }
    if let Some(status) = filter.status() {
        predicate = Box::new(predicate.and(tasks::status.eq(status.as_str())));
    }
    if let Some(range) = filter.index_range() {
        predicate = Box::new(predicate.and(tasks::position.ge(to_position(range.start())?)));
        if let Some(end) = range.end() {
            predicate = Box::new(predicate.and(tasks::position.le(to_position(end)?)));
        }
    }
    if let Some(excluded) = filter.exclude() {
        predicate = Box::new(predicate.and(tasks::id.ne(excluded.into_inner())));
    }
    Ok(predicate)
}

fn to_position(index: TaskIndex) -> TaskRepositoryResult<i32> {
    i32::try_from(index.value()).map_err(TaskRepositoryError::persistence)
}

fn to_new_row(task: &Task) -> TaskRepositoryResult<NewTaskRow> {
    Ok(NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner_id().into_inner(),
        title: task.title().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        position: to_position(task.index())?,
        image: task.image().map(|image| image.as_str().to_owned()),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
        deleted_at: task.deleted_at(),
    })
}

fn to_changeset(task: &Task) -> TaskRepositoryResult<TaskChangeset> {
    Ok(TaskChangeset {
        title: task.title().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        position: to_position(task.index())?,
        image: task.image().map(|image| image.as_str().to_owned()),
        updated_at: task.updated_at(),
        deleted_at: task.deleted_at(),
    })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner_id,
        title: persisted_title,
        status: persisted_status,
        position,
        image: persisted_image,
        created_at,
        updated_at,
        deleted_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let index = u32::try_from(position)
        .map(TaskIndex::new)
        .map_err(TaskRepositoryError::persistence)?;
    let image = persisted_image
        .as_deref()
        .map(ImageUrl::parse)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner_id: OwnerId::from_uuid(owner_id),
        title,
        status,
        index,
        image,
        created_at,
        updated_at,
        deleted_at,
    };
    Ok(Task::from_persisted(data))
}

//! `PostgreSQL` repository implementation for column preferences.

use super::{
    blocking::{BoardPgPool, run_blocking},
    models::ColumnPreferenceRow,
    schema::column_preferences,
};
use crate::board::{
    domain::{ColumnOrder, ColumnPreference, OwnerId, PersistedColumnPreference},
    ports::{
        ColumnPreferenceRepository, ColumnPreferenceRepositoryError,
        ColumnPreferenceRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed column preference repository.
#[derive(Debug, Clone)]
pub struct PostgresColumnPreferenceRepository {
    pool: BoardPgPool,
}

impl PostgresColumnPreferenceRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ColumnPreferenceRepository for PostgresColumnPreferenceRepository {
    async fn store(&self, preference: &ColumnPreference) -> ColumnPreferenceRepositoryResult<()> {
        let user_id = preference.user_id();
        let row = to_row(preference);

        run_blocking(
            &self.pool,
            ColumnPreferenceRepositoryError::Persistence,
            move |connection| {
                diesel::insert_into(column_preferences::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            ColumnPreferenceRepositoryError::DuplicateUser(user_id)
                        }
                        _ => ColumnPreferenceRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
        )
        .await
    }

    async fn find(
        &self,
        user_id: OwnerId,
    ) -> ColumnPreferenceRepositoryResult<Option<ColumnPreference>> {
        run_blocking(
            &self.pool,
            ColumnPreferenceRepositoryError::Persistence,
            move |connection| {
                let row = column_preferences::table
                    .find(user_id.into_inner())
                    .select(ColumnPreferenceRow::as_select())
                    .first::<ColumnPreferenceRow>(connection)
                    .optional()
                    .map_err(ColumnPreferenceRepositoryError::persistence)?;
                row.map(row_to_preference).transpose()
            },
        )
        .await
    }

    async fn update(&self, preference: &ColumnPreference) -> ColumnPreferenceRepositoryResult<()> {
        let user_id = preference.user_id();
        let row = to_row(preference);

        run_blocking(
            &self.pool,
            ColumnPreferenceRepositoryError::Persistence,
            move |connection| {
                let updated = diesel::update(column_preferences::table.find(row.user_id))
                    .set((
                        column_preferences::first.eq(row.first),
                        column_preferences::second.eq(row.second),
                        column_preferences::third.eq(row.third),
                        column_preferences::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(ColumnPreferenceRepositoryError::persistence)?;
                if updated == 0 {
                    return Err(ColumnPreferenceRepositoryError::NotFound(user_id));
                }
                Ok(())
            },
        )
        .await
    }
}

fn to_row(preference: &ColumnPreference) -> ColumnPreferenceRow {
    let [first, second, third] = preference.order().ordinals();
    ColumnPreferenceRow {
        user_id: preference.user_id().into_inner(),
        first: i32::from(first),
        second: i32::from(second),
        third: i32::from(third),
        updated_at: preference.updated_at(),
    }
}

fn row_to_preference(
    row: ColumnPreferenceRow,
) -> ColumnPreferenceRepositoryResult<ColumnPreference> {
    let order = ColumnOrder::from_ordinals(row.first, row.second, row.third)
        .map_err(ColumnPreferenceRepositoryError::persistence)?;
    Ok(ColumnPreference::from_persisted(PersistedColumnPreference {
        user_id: OwnerId::from_uuid(row.user_id),
        order,
        updated_at: row.updated_at,
    }))
}

//! Diesel row models for board persistence.

use super::schema::{column_preferences, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Column status.
    pub status: String,
    /// Column position.
    pub position: i32,
    /// Hosted image URL.
    pub image: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Column status.
    pub status: String,
    /// Column position.
    pub position: i32,
    /// Hosted image URL.
    pub image: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Changeset written when a task is updated.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Column status.
    pub status: String,
    /// Column position.
    pub position: i32,
    /// Hosted image URL.
    pub image: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Row model for column preferences, used for both reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = column_preferences)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ColumnPreferenceRow {
    /// Owning user.
    pub user_id: uuid::Uuid,
    /// Ordinal shown in the leftmost slot.
    pub first: i32,
    /// Ordinal shown in the middle slot.
    pub second: i32,
    /// Ordinal shown in the rightmost slot.
    pub third: i32,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

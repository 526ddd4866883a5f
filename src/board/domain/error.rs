//! Error types for board domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title is {0} characters long, expected at most 255")]
    TitleTooLong(usize),

    /// The status string does not name a board column.
    #[error("unknown task status: {0}")]
    InvalidStatus(String),

    /// The status ordinal is outside `0..=2`.
    #[error("unknown task status ordinal: {0}")]
    InvalidStatusOrdinal(i32),

    /// The column slot is outside `0..=2`.
    #[error("invalid column slot {0}, expected 0, 1 or 2")]
    InvalidColumnSlot(usize),

    /// The stored column order is not a permutation of the three statuses.
    #[error("column order ({first}, {second}, {third}) is not a permutation of (0, 1, 2)")]
    NotAPermutation {
        /// Ordinal stored in the first slot.
        first: i32,
        /// Ordinal stored in the second slot.
        second: i32,
        /// Ordinal stored in the third slot.
        third: i32,
    },

    /// The image reference is not an absolute URL.
    #[error("invalid image URL '{0}'")]
    InvalidImageUrl(String),

    /// The requested position lies outside the target column.
    #[error("index {index} is out of range for a column of {len} tasks")]
    IndexOutOfRange {
        /// Requested index.
        index: u64,
        /// Number of tasks the column can address.
        len: u64,
    },

    /// The task has already been soft-deleted.
    #[error("task {0} is already deleted")]
    TaskAlreadyDeleted(TaskId),
}

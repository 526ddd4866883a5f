//! The three fixed board column statuses.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column a task belongs to.
///
/// Ordinals are stable and are what the per-user column order stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work not yet started.
    Todo,
    /// Work under way.
    InProgress,
    /// Finished work.
    Done,
}

impl TaskStatus {
    /// All statuses in ordinal order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the status ordinal (`0` for `Todo`, `1` for `InProgress`,
    /// `2` for `Done`).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Resolves a persisted ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidStatusOrdinal`] for values outside
    /// `0..=2`.
    pub const fn from_ordinal(value: i32) -> Result<Self, BoardDomainError> {
        match value {
            0 => Ok(Self::Todo),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Done),
            _ => Err(BoardDomainError::InvalidStatusOrdinal(value)),
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(BoardDomainError::InvalidStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

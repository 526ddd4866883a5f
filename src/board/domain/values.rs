//! Validated scalar values carried by tasks.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Maximum title length, matching the `VARCHAR(255)` column.
const MAX_TITLE_LENGTH: usize = 255;

/// Trimmed, non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is blank, or
    /// [`BoardDomainError::TitleTooLong`] when it exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }

        let length = trimmed.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(BoardDomainError::TitleTooLong(length));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Zero-based position of a task inside its `(owner, status)` column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskIndex(u32);

impl TaskIndex {
    /// The head of a column.
    pub const FIRST: Self = Self(0);

    /// Wraps a raw position.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the position a task appended to a column of `len` tasks takes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfRange`] when the column is too
    /// large to address.
    pub fn from_len(len: usize) -> Result<Self, BoardDomainError> {
        u32::try_from(len)
            .map(Self)
            .map_err(|_| BoardDomainError::IndexOutOfRange {
                index: u64::try_from(len).unwrap_or(u64::MAX),
                len: u64::from(u32::MAX),
            })
    }

    /// Returns the raw position.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the following position.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the preceding position, saturating at the head of the column.
    #[must_use]
    pub const fn predecessor(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Applies a one-step shift.
    #[must_use]
    pub const fn shifted(self, delta: IndexDelta) -> Self {
        match delta {
            IndexDelta::Increment => self.successor(),
            IndexDelta::Decrement => self.predecessor(),
        }
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a batch index shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexDelta {
    /// Move tasks one slot later to open a gap.
    Increment,
    /// Move tasks one slot earlier to close a gap.
    Decrement,
}

impl IndexDelta {
    /// Returns the signed step applied to each shifted index.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// Absolute URL of a hosted task image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrl(Url);

impl ImageUrl {
    /// Parses and validates an image URL.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidImageUrl`] when the value is not an
    /// absolute URL.
    pub fn parse(value: &str) -> Result<Self, BoardDomainError> {
        Url::parse(value.trim())
            .map(Self)
            .map_err(|_| BoardDomainError::InvalidImageUrl(value.to_owned()))
    }

    /// Wraps an already parsed URL.
    #[must_use]
    pub const fn from_url(url: Url) -> Self {
        Self(url)
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

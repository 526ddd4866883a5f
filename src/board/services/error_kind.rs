//! Caller-facing classification of service failures.

use std::fmt;

/// Broad category of a rejected board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardErrorKind {
    /// The referenced task or user does not exist for the caller.
    NotFound,
    /// The request itself is invalid (empty title, bad status, bad slot,
    /// out-of-range index, non-permutation).
    Validation,
    /// The store failed or rejected a write. Not retried.
    StoreFailure,
}

impl fmt::Display for BoardErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation_error",
            Self::StoreFailure => "store_failure",
        };
        f.write_str(label)
    }
}

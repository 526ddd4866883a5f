//! Per-user left-to-right column order.
//!
//! A column order is always a permutation of the three statuses. Dragging a
//! column to a new slot is a single-element move inside that permutation,
//! expressed as a table of direct field rewrites keyed by the column's
//! current slot and its destination slot.

use super::{BoardDomainError, OwnerId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display slot of a column on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSlot {
    /// Leftmost column.
    First,
    /// Middle column.
    Second,
    /// Rightmost column.
    Third,
}

impl ColumnSlot {
    /// All slots from left to right.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Returns the zero-based slot position.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// Resolves a zero-based slot position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidColumnSlot`] for positions outside
    /// `0..=2`.
    pub const fn from_position(position: usize) -> Result<Self, BoardDomainError> {
        match position {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            2 => Ok(Self::Third),
            _ => Err(BoardDomainError::InvalidColumnSlot(position)),
        }
    }
}

impl TryFrom<usize> for ColumnSlot {
    type Error = BoardDomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_position(value)
    }
}

impl fmt::Display for ColumnSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}

/// Permutation of the three statuses giving their display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnOrder {
    first: TaskStatus,
    second: TaskStatus,
    third: TaskStatus,
}

impl Default for ColumnOrder {
    fn default() -> Self {
        Self {
            first: TaskStatus::Todo,
            second: TaskStatus::InProgress,
            third: TaskStatus::Done,
        }
    }
}

impl ColumnOrder {
    /// Creates a column order from three statuses.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotAPermutation`] when any status repeats.
    pub fn new(
        first: TaskStatus,
        second: TaskStatus,
        third: TaskStatus,
    ) -> Result<Self, BoardDomainError> {
        if first == second || first == third || second == third {
            return Err(BoardDomainError::NotAPermutation {
                first: i32::from(first.ordinal()),
                second: i32::from(second.ordinal()),
                third: i32::from(third.ordinal()),
            });
        }
        Ok(Self {
            first,
            second,
            third,
        })
    }

    /// Creates a column order from persisted status ordinals.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotAPermutation`] unless the three values
    /// are exactly `{0, 1, 2}` in some order.
    pub fn from_ordinals(first: i32, second: i32, third: i32) -> Result<Self, BoardDomainError> {
        let not_a_permutation = BoardDomainError::NotAPermutation {
            first,
            second,
            third,
        };
        let resolve = |value| TaskStatus::from_ordinal(value).map_err(|_| not_a_permutation.clone());
        Self::new(resolve(first)?, resolve(second)?, resolve(third)?)
            .map_err(|_| not_a_permutation.clone())
    }

    /// Returns the status shown in the leftmost slot.
    #[must_use]
    pub const fn first(self) -> TaskStatus {
        self.first
    }

    /// Returns the status shown in the middle slot.
    #[must_use]
    pub const fn second(self) -> TaskStatus {
        self.second
    }

    /// Returns the status shown in the rightmost slot.
    #[must_use]
    pub const fn third(self) -> TaskStatus {
        self.third
    }

    /// Returns the statuses from left to right.
    #[must_use]
    pub const fn statuses(self) -> [TaskStatus; 3] {
        [self.first, self.second, self.third]
    }

    /// Returns the status ordinals from left to right.
    #[must_use]
    pub const fn ordinals(self) -> [u8; 3] {
        [
            self.first.ordinal(),
            self.second.ordinal(),
            self.third.ordinal(),
        ]
    }

    /// Returns the status displayed at `slot`.
    #[must_use]
    pub const fn status_at(self, slot: ColumnSlot) -> TaskStatus {
        match slot {
            ColumnSlot::First => self.first,
            ColumnSlot::Second => self.second,
            ColumnSlot::Third => self.third,
        }
    }

    /// Returns the slot currently showing `status`.
    #[must_use]
    pub fn slot_of(self, status: TaskStatus) -> ColumnSlot {
        if self.first == status {
            ColumnSlot::First
        } else if self.second == status {
            ColumnSlot::Second
        } else {
            ColumnSlot::Third
        }
    }

    /// Moves the `status` column to `destination`, keeping the relative order
    /// of the other two.
    ///
    /// Returns `None` when the column already occupies `destination`, in which
    /// case nothing needs to be written.
    #[must_use]
    pub fn move_column(self, status: TaskStatus, destination: ColumnSlot) -> Option<Self> {
        transition(self.slot_of(status), destination).map(|rewrite| rewrite(self, status))
    }
}

/// Rewrites a column order after moving one status between two slots.
type SlotRewrite = fn(ColumnOrder, TaskStatus) -> ColumnOrder;

const fn transition(from: ColumnSlot, to: ColumnSlot) -> Option<SlotRewrite> {
    match (from, to) {
        (ColumnSlot::First, ColumnSlot::First)
        | (ColumnSlot::Second, ColumnSlot::Second)
        | (ColumnSlot::Third, ColumnSlot::Third) => None,
        (ColumnSlot::First, ColumnSlot::Second) => Some(first_to_second),
        (ColumnSlot::First, ColumnSlot::Third) => Some(first_to_third),
        (ColumnSlot::Second, ColumnSlot::First) => Some(second_to_first),
        (ColumnSlot::Second, ColumnSlot::Third) => Some(second_to_third),
        (ColumnSlot::Third, ColumnSlot::First) => Some(third_to_first),
        (ColumnSlot::Third, ColumnSlot::Second) => Some(third_to_second),
    }
}

const fn first_to_second(order: ColumnOrder, moved: TaskStatus) -> ColumnOrder {
    ColumnOrder {
        first: order.second,
        second: moved,
        third: order.third,
    }
}

const fn first_to_third(order: ColumnOrder, moved: TaskStatus) -> ColumnOrder {
    ColumnOrder {
        first: order.second,
        second: order.third,
        third: moved,
    }
}

const fn second_to_first(order: ColumnOrder, moved: TaskStatus) -> ColumnOrder {
    ColumnOrder {
        first: moved,
        second: order.first,
        third: order.third,
    }
}

const fn second_to_third(order: ColumnOrder, moved: TaskStatus) -> ColumnOrder {
    ColumnOrder {
        first: order.first,
        second: order.third,
        third: moved,
    }
}

const fn third_to_first(order: ColumnOrder, moved: TaskStatus) -> ColumnOrder {
    ColumnOrder {
        first: moved,
        second: order.first,
        third: order.second,
    }
}

const fn third_to_second(order: ColumnOrder, moved: TaskStatus) -> ColumnOrder {
    ColumnOrder {
        first: order.first,
        second: moved,
        third: order.second,
    }
}

/// Stored column order for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPreference {
    user_id: OwnerId,
    order: ColumnOrder,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted column preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedColumnPreference {
    /// Persisted user identifier.
    pub user_id: OwnerId,
    /// Persisted column order.
    pub order: ColumnOrder,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ColumnPreference {
    /// Creates the default preference for a user seen for the first time.
    #[must_use]
    pub fn new(user_id: OwnerId, clock: &impl Clock) -> Self {
        Self {
            user_id,
            order: ColumnOrder::default(),
            updated_at: clock.utc(),
        }
    }

    /// Reconstructs a preference from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedColumnPreference) -> Self {
        Self {
            user_id: data.user_id,
            order: data.order,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> OwnerId {
        self.user_id
    }

    /// Returns the stored column order.
    #[must_use]
    pub const fn order(&self) -> ColumnOrder {
        self.order
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the stored column order.
    pub fn apply_order(&mut self, order: ColumnOrder, clock: &impl Clock) {
        self.order = order;
        self.updated_at = clock.utc();
    }
}

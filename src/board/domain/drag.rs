//! Outcome of a drag gesture captured by the presentation layer.

use super::ColumnSlot;
use serde::{Deserialize, Serialize};

/// A point on the rendered board: a display slot and a position within the
/// displayed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragLocation {
    /// Display slot of the column.
    pub slot: ColumnSlot,
    /// Position inside the displayed, index-sorted column.
    pub position: usize,
}

impl DragLocation {
    /// Creates a drag location.
    #[must_use]
    pub const fn new(slot: ColumnSlot, position: usize) -> Self {
        Self { slot, position }
    }
}

/// What the user dropped and where.
///
/// A missing destination means the item was dropped outside any target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropOutcome {
    /// A whole column was dragged between slots.
    Column {
        /// Slot the column was picked up from.
        source: ColumnSlot,
        /// Slot the column was dropped on.
        destination: Option<ColumnSlot>,
    },
    /// A task card was dragged.
    Task {
        /// Where the card was picked up.
        source: DragLocation,
        /// Where the card was dropped.
        destination: Option<DragLocation>,
    },
}

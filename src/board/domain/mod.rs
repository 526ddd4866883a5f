//! Domain model for the task board.
//!
//! Tasks, column statuses, the per-user column permutation and the derived
//! board view live here, free of any storage or transport concern.

mod column_order;
mod drag;
mod error;
mod ids;
mod status;
mod task;
mod values;
mod view;

pub use column_order::{ColumnOrder, ColumnPreference, ColumnSlot, PersistedColumnPreference};
pub use drag::{DragLocation, DropOutcome};
pub use error::BoardDomainError;
pub use ids::{OwnerId, TaskId};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
pub use values::{ImageUrl, IndexDelta, TaskIndex, TaskTitle};
pub use view::{Board, BoardSearch, Column};

//! Application services for board orchestration.

mod board;
mod column_order;
mod error_kind;
mod index;

pub use board::{
    BoardService, BoardServiceError, BoardServiceResult, CreateBoardTaskRequest, DropEffect,
};
pub use column_order::{ColumnOrderError, ColumnOrderResult, ColumnOrderService};
pub use error_kind::BoardErrorKind;
pub use index::{
    CreateTaskRequest, MoveTaskRequest, ReorderTaskRequest, TaskIndexError, TaskIndexResult,
    TaskIndexService,
};

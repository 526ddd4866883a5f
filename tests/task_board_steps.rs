//! Behaviour tests for board index maintenance and column ordering.

#[path = "task_board_steps/mod.rs"]
mod task_board_steps_defs;

use rstest_bdd_macros::scenario;
use task_board_steps_defs::world::{BoardWorld, world};

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Reorder the last task to the front of its column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_last_task_to_front(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Move a task into an empty column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_into_empty_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Drag the DONE column to the front"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drag_done_column_to_front(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Create a task in an empty column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_in_empty_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Soft delete leaves a gap in the column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn soft_delete_leaves_gap(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Reorder to the current position changes nothing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_to_current_position(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Reject a task with a blank title"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_blank_title(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Reject a column order change for an unknown owner"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_column_order_for_unknown_owner(world: BoardWorld) {
    let _ = world;
}

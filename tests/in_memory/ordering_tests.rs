//! In-memory integration tests for index maintenance.

use super::helpers::{
    TestService, column_indices, column_titles, owner, seed_column, service, task_named,
};
use rstest::rstest;
use taskboard::board::{
    domain::{OwnerId, TaskStatus},
    services::{MoveTaskRequest, ReorderTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_then_move_keeps_both_columns_dense(
    service: TestService,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let todo = seed_column(&service, owner, TaskStatus::Todo, &["A", "B", "C", "D"]).await?;
    seed_column(&service, owner, TaskStatus::Done, &["X"]).await?;

    service
        .reorder_task(ReorderTaskRequest::new(owner, task_named(&todo, "D")?.id(), 1))
        .await?;
    service
        .move_task(MoveTaskRequest::new(
            owner,
            task_named(&todo, "A")?.id(),
            TaskStatus::Done,
            0,
        ))
        .await?;

    eyre::ensure!(
        column_titles(&service, owner, TaskStatus::Todo).await? == ["D", "B", "C"],
        "unexpected TODO order"
    );
    eyre::ensure!(
        column_titles(&service, owner, TaskStatus::Done).await? == ["A", "X"],
        "unexpected DONE order"
    );
    eyre::ensure!(
        column_indices(&service, owner, TaskStatus::Todo).await? == [0, 1, 2],
        "TODO indices are not dense"
    );
    eyre::ensure!(
        column_indices(&service, owner, TaskStatus::Done).await? == [0, 1],
        "DONE indices are not dense"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn round_trip_move_restores_original_layout(
    service: TestService,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let todo = seed_column(&service, owner, TaskStatus::Todo, &["A", "B", "C"]).await?;
    let b = task_named(&todo, "B")?.id();

    service
        .move_task(MoveTaskRequest::new(owner, b, TaskStatus::InProgress, 0))
        .await?;
    service
        .move_task(MoveTaskRequest::new(owner, b, TaskStatus::Todo, 1))
        .await?;

    eyre::ensure!(
        column_titles(&service, owner, TaskStatus::Todo).await? == ["A", "B", "C"],
        "layout not restored"
    );
    eyre::ensure!(
        column_titles(&service, owner, TaskStatus::InProgress)
            .await?
            .is_empty(),
        "IN_PROGRESS should be empty again"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_after_delete_closes_the_gap(
    service: TestService,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let todo = seed_column(&service, owner, TaskStatus::Todo, &["A", "B", "C"]).await?;
    service
        .soft_delete_task(owner, task_named(&todo, "B")?.id())
        .await?;
    eyre::ensure!(
        column_indices(&service, owner, TaskStatus::Todo).await? == [0, 2],
        "delete must not compact the column"
    );

    service
        .reorder_task(ReorderTaskRequest::new(owner, task_named(&todo, "C")?.id(), 1))
        .await?;

    eyre::ensure!(
        column_indices(&service, owner, TaskStatus::Todo).await? == [0, 1],
        "reorder should close the gap"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_of_one_owner_leave_another_untouched(
    service: TestService,
) -> Result<(), eyre::Report> {
    let alice = OwnerId::new();
    let bob = OwnerId::new();
    let mine = seed_column(&service, alice, TaskStatus::Todo, &["A", "B"]).await?;
    seed_column(&service, bob, TaskStatus::Todo, &["P", "Q"]).await?;

    service
        .reorder_task(ReorderTaskRequest::new(alice, task_named(&mine, "B")?.id(), 0))
        .await?;

    eyre::ensure!(
        column_titles(&service, bob, TaskStatus::Todo).await? == ["P", "Q"],
        "another owner's column changed"
    );
    Ok(())
}

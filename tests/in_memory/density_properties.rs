//! Property tests: random create, reorder and move sequences keep every
//! column densely indexed.

use super::helpers::{TestService, column_indices, service};
use proptest::prelude::*;
use taskboard::board::{
    domain::{OwnerId, Task, TaskStatus},
    services::{CreateTaskRequest, MoveTaskRequest, ReorderTaskRequest},
};

#[derive(Debug, Clone)]
enum Operation {
    Create(TaskStatus),
    Reorder { pick: usize, target: usize },
    Move { pick: usize, status: TaskStatus, target: usize },
}

fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop::sample::select(TaskStatus::ALL.to_vec())
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        arb_status().prop_map(Operation::Create),
        (any::<usize>(), any::<usize>())
            .prop_map(|(pick, target)| Operation::Reorder { pick, target }),
        (any::<usize>(), arb_status(), any::<usize>()).prop_map(|(pick, status, target)| {
            Operation::Move {
                pick,
                status,
                target,
            }
        }),
    ]
}

fn column_len(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|task| task.status() == status).count()
}

fn to_index(value: usize) -> Result<u32, eyre::Report> {
    Ok(u32::try_from(value)?)
}

async fn apply(
    service: &TestService,
    owner: OwnerId,
    operation: Operation,
    counter: usize,
) -> Result<(), eyre::Report> {
    let tasks = service.list_tasks(owner).await?;
    match operation {
        Operation::Create(status) => {
            service
                .create_task(CreateTaskRequest::new(owner, format!("task {counter}"), status))
                .await?;
        }
        Operation::Reorder { pick, target } => {
            let Some(task) = tasks.get(pick % tasks.len().max(1)) else {
                return Ok(());
            };
            let len = column_len(&tasks, task.status());
            let new_index = to_index(target % len)?;
            service
                .reorder_task(ReorderTaskRequest::new(owner, task.id(), new_index))
                .await?;
        }
        Operation::Move {
            pick,
            status,
            target,
        } => {
            let Some(task) = tasks.get(pick % tasks.len().max(1)) else {
                return Ok(());
            };
            let slots = if task.status() == status {
                column_len(&tasks, status)
            } else {
                column_len(&tasks, status) + 1
            };
            let new_index = to_index(target % slots)?;
            service
                .move_task(MoveTaskRequest::new(owner, task.id(), status, new_index))
                .await?;
        }
    }
    Ok(())
}

async fn run_sequence(operations: Vec<Operation>) -> Result<(), eyre::Report> {
    let service = service();
    let owner = OwnerId::new();
    for (counter, operation) in operations.into_iter().enumerate() {
        apply(&service, owner, operation, counter).await?;
        for status in TaskStatus::ALL {
            let indices = column_indices(&service, owner, status).await?;
            let expected: Vec<u32> = (0..to_index(indices.len())?).collect();
            eyre::ensure!(
                indices == expected,
                "column {status} is not dense after step {counter}: {indices:?}"
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_operations_keep_columns_dense(
        operations in prop::collection::vec(arb_operation(), 1..40),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime should build");
        let outcome = runtime.block_on(run_sequence(operations));
        prop_assert!(outcome.is_ok(), "{outcome:?}");
    }
}

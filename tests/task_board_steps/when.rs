//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use rstest_bdd_macros::when;
use taskboard::board::{
    domain::ColumnSlot,
    services::{CreateBoardTaskRequest, MoveTaskRequest, ReorderTaskRequest},
};

#[when(r#"task "{title}" is reordered to index {index:u32}"#)]
fn reorder_task(world: &mut BoardWorld, title: String, index: u32) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(
        world
            .service
            .reorder_task(ReorderTaskRequest::new(world.owner, task_id, index)),
    );
    world.record(result);
    Ok(())
}

#[when(r#"task "{title}" is moved to "{status}" at index {index:u32}"#)]
fn move_task(
    world: &mut BoardWorld,
    title: String,
    status: String,
    index: u32,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let target = parse_status(&status)?;
    let result = run_async(world.service.move_task(MoveTaskRequest::new(
        world.owner,
        task_id,
        target,
        index,
    )));
    world.record(result);
    Ok(())
}

#[when(r#"task "{title}" is created in "{status}""#)]
fn create_task(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let parsed = parse_status(&status)?;
    let result = run_async(world.service.create_task(CreateBoardTaskRequest::new(
        world.owner,
        title.clone(),
        parsed,
    )));
    match result {
        Ok(task) => {
            world.tasks_by_title.insert(title, task.id());
        }
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"a task with a blank title is created in "{status}""#)]
fn create_blank_task(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = parse_status(&status)?;
    let result = run_async(
        world
            .service
            .create_task(CreateBoardTaskRequest::new(world.owner, "   ", parsed)),
    );
    world.record(result);
    Ok(())
}

#[when(r#"task "{title}" is soft-deleted"#)]
fn soft_delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.service.soft_delete_task(world.owner, task_id));
    world.record(result);
    Ok(())
}

#[when(r#"the "{status}" column is dragged to slot {slot:usize}"#)]
fn drag_column(world: &mut BoardWorld, status: String, slot: usize) -> Result<(), eyre::Report> {
    let parsed = parse_status(&status)?;
    let destination =
        ColumnSlot::try_from(slot).map_err(|err| eyre::eyre!("invalid slot: {err}"))?;
    let result = run_async(
        world
            .service
            .update_column_order(world.owner, parsed, destination),
    );
    match result {
        Ok(order) => world.last_order = Some(order),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

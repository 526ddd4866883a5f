//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, parse_list, parse_status, run_async};
use rstest_bdd_macros::then;
use taskboard::board::{domain::BoardSearch, services::BoardErrorKind};

#[then(r#"the "{status}" column reads "{titles}""#)]
fn column_reads(world: &BoardWorld, status: String, titles: String) -> Result<(), eyre::Report> {
    let parsed = parse_status(&status)?;
    let board = run_async(world.service.get_board(world.owner, &BoardSearch::default()))?;
    let column = board
        .column(parsed)
        .ok_or_else(|| eyre::eyre!("board has no {parsed} column"))?;
    let actual: Vec<String> = column
        .tasks()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    let expected = parse_list(&titles);

    eyre::ensure!(
        actual == expected,
        "expected {parsed} column {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"task "{title}" has index {index:u32}"#)]
fn task_has_index(world: &BoardWorld, title: String, index: u32) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let tasks = run_async(world.service.tasks().list_tasks(world.owner))?;
    let task = tasks
        .iter()
        .find(|task| task.id() == task_id)
        .ok_or_else(|| eyre::eyre!("task {title} is not live"))?;

    eyre::ensure!(
        task.index().value() == index,
        "expected task {title} at index {index}, found {}",
        task.index()
    );
    Ok(())
}

#[then(r#"the column order is "{ordinals}""#)]
fn column_order_is(world: &BoardWorld, ordinals: String) -> Result<(), eyre::Report> {
    let order = world
        .last_order
        .ok_or_else(|| eyre::eyre!("no column order recorded"))?;
    let actual: Vec<String> = order
        .ordinals()
        .iter()
        .map(ToString::to_string)
        .collect();

    eyre::ensure!(
        actual == parse_list(&ordinals),
        "expected column order {ordinals}, found {actual:?}"
    );
    Ok(())
}

#[then("the last operation fails with a validation error")]
fn fails_with_validation(world: &BoardWorld) -> Result<(), eyre::Report> {
    expect_kind(world, BoardErrorKind::Validation)
}

#[then("the last operation fails with a not found error")]
fn fails_with_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    expect_kind(world, BoardErrorKind::NotFound)
}

fn expect_kind(world: &BoardWorld, expected: BoardErrorKind) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the last operation to fail"))?;

    eyre::ensure!(
        err.kind() == expected,
        "expected a {expected} error, got {err}"
    );
    Ok(())
}

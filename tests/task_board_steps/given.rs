//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, parse_list, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::services::CreateBoardTaskRequest;

#[given("a board owner")]
fn board_owner(world: &mut BoardWorld) {
    world.tasks_by_title.clear();
}

#[given("a registered board owner")]
fn registered_board_owner(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.service.register_owner(world.owner))
        .wrap_err("register owner with default column order")?;
    Ok(())
}

#[given(r#"the "{status}" column holds "{titles}""#)]
fn column_holds(
    world: &mut BoardWorld,
    status: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let parsed = parse_status(&status)?;
    for title in parse_list(&titles) {
        let task = run_async(world.service.create_task(CreateBoardTaskRequest::new(
            world.owner,
            title.clone(),
            parsed,
        )))
        .wrap_err("seed column for scenario")?;
        world.tasks_by_title.insert(title, task.id());
    }
    Ok(())
}

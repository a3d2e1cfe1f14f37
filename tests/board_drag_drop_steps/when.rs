//! When steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::TaskStatus,
    services::{BoardOutcome, Confirmation, TaskFields},
};

#[when(r#""{dragged}" is dropped on the "{status}" column"#)]
fn dropped_on_column(
    world: &mut BoardWorld,
    dragged: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&dragged)?;
    let column = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let before = world.board.tasks();
    let outcome = run_async(world.board.drop_on_column(id, column));
    world.record(before, outcome);
    Ok(())
}

#[when(r#""{dragged}" is dropped on "{target}""#)]
fn dropped_on_task(
    world: &mut BoardWorld,
    dragged: String,
    target: String,
) -> Result<(), eyre::Report> {
    let dragged_id = world.id_of(&dragged)?;
    let target_id = world.id_of(&target)?;
    let before = world.board.tasks();
    let outcome = run_async(world.board.drop_on_task(dragged_id, target_id));
    world.record(before, outcome);
    Ok(())
}

#[when(r#"the user confirms deleting "{name}""#)]
fn confirms_delete(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&name)?;
    let before = world.board.tasks();
    let outcome = run_async(world.board.delete_task(id, Confirmation::Confirmed));
    world.record(before, outcome);
    Ok(())
}

#[when(r#"the user creates "{name}" in the "{status}" column"#)]
fn creates_task(world: &mut BoardWorld, name: String, status: String) -> Result<(), eyre::Report> {
    let column = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let before = world.board.tasks();
    let outcome = run_async(world.board.create_task(column, TaskFields::new(name.as_str())));
    if let Ok(BoardOutcome::Applied(ref created)) = outcome {
        world.names.insert(name, created.id());
    }
    world.record(before, outcome);
    Ok(())
}

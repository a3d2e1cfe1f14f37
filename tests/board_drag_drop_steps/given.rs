//! Given steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, PROJECT, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{
    domain::{NewTask, Position, TaskStatus, TaskTitle},
    ports::TaskRepository,
};

#[given(r#"task "{name}" in "{status}" at position {position:i64}"#)]
fn task_in_column(
    world: &mut BoardWorld,
    name: String,
    status: String,
    position: i64,
) -> Result<(), eyre::Report> {
    let column = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let new_task = NewTask::new(
        PROJECT,
        TaskTitle::new(name.as_str())?,
        column,
        Position::new(position)?,
    );
    let created = run_async(world.store.inner().create(&new_task))
        .wrap_err("seed scenario task")?;
    world.names.insert(name, created.id());
    Ok(())
}

#[given("the board is loaded")]
fn board_is_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.load_tasks(PROJECT)).wrap_err("load scenario board")?;
    Ok(())
}

#[given("the store is offline")]
fn store_is_offline(world: &mut BoardWorld) {
    world.store.go_offline();
}

#[given(r#""{name}" was deleted in another session"#)]
fn deleted_elsewhere(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&name)?;
    let removed = run_async(world.store.inner().delete(id)).wrap_err("delete behind the board")?;
    eyre::ensure!(removed, "task {name:?} should have existed");
    Ok(())
}

//! Then steps for task list BDD scenarios.

use super::world::{TaskListWorld, ViewSignal, run_async};
use rstest_bdd_macros::then;
use taskdeck::tasks::{domain::Task, ports::TasksDataSource};

#[then("{count:usize} tasks are shown")]
fn tasks_are_shown(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world
        .last_shown_tasks()
        .ok_or_else(|| eyre::eyre!("no tasks were shown"))?;
    eyre::ensure!(
        shown.len() == count,
        "expected {count} tasks, found {}",
        shown.len()
    );
    Ok(())
}

#[then("no tasks are shown")]
fn no_tasks_are_shown(world: &TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_shown_tasks().is_none(),
        "tasks were pushed to a detached view"
    );
    Ok(())
}

#[then("the loading indicator is hidden before the tasks are shown")]
fn loading_indicator_precedes_tasks(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let signals = world.view().signals();
    let position = |wanted: fn(&ViewSignal) -> bool| {
        signals
            .iter()
            .position(wanted)
            .ok_or_else(|| eyre::eyre!("missing view signal in {signals:?}"))
    };

    let shown = position(|s| *s == ViewSignal::LoadingIndicator(true))?;
    let hidden = position(|s| *s == ViewSignal::LoadingIndicator(false))?;
    let tasks = position(|s| matches!(s, ViewSignal::Tasks(_)))?;

    eyre::ensure!(
        shown < hidden && hidden < tasks,
        "unexpected signal order: {signals:?}"
    );
    Ok(())
}

#[then("the view confirms the task was marked complete")]
fn view_confirms_marked_complete(world: &TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.view().signals().contains(&ViewSignal::MarkedComplete),
        "task completion was not confirmed"
    );
    Ok(())
}

#[then("the view confirms completed tasks were cleared")]
fn view_confirms_cleared(world: &TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.view().signals().contains(&ViewSignal::CompletedCleared),
        "clearing was not confirmed"
    );
    Ok(())
}

#[then("no active tasks remain in storage")]
fn no_active_tasks_remain(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.data_source.get_tasks())
        .map_err(|err| eyre::eyre!("load tasks for scenario: {err}"))?;
    eyre::ensure!(
        tasks.iter().all(Task::is_completed),
        "found active tasks: {tasks:?}"
    );
    Ok(())
}

//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::given;
use taskdeck::tasks::domain::{Task, TasksFilterType};

#[given("a task list with {active:usize} active and {completed:usize} completed tasks")]
fn task_list_with(world: &mut TaskListWorld, active: usize, completed: usize) {
    let active_tasks = (1..=active).map(|n| Task::new(format!("Active{n}"), "To do"));
    let completed_tasks =
        (1..=completed).map(|n| Task::new_completed(format!("Completed{n}"), "Done"));
    *world = TaskListWorld::with_tasks(active_tasks.chain(completed_tasks).collect());
}

#[given(r#"the filter is "{filter}""#)]
fn filter_is(world: &mut TaskListWorld, filter: String) -> Result<(), eyre::Report> {
    let parsed = TasksFilterType::try_from(filter.as_str())
        .map_err(|err| eyre::eyre!("invalid filter in scenario: {err}"))?;
    world.presenter.set_filtering(parsed);
    Ok(())
}

#[given("the view is detached")]
fn view_is_detached(world: &mut TaskListWorld) {
    world.view().detach();
}

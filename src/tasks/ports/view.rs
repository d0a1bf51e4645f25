//! View port for the task list screen.

use crate::tasks::domain::{Task, TaskId, TasksFilterType};
use std::sync::Arc;

/// Signals a presenter pushes to whatever renders the task list.
///
/// Implementations own their rendering state and use interior mutability
/// where they need it; every method takes `&self`.
pub trait TasksView: Send + Sync {
    /// Shows or hides the loading indicator.
    fn set_loading_indicator(&self, active: bool);

    /// Renders the filtered task list.
    fn show_tasks(&self, tasks: &[Task]);

    /// Labels the list with the filter in effect.
    fn show_filter_label(&self, filter: TasksFilterType);

    /// Navigates to the add-task screen.
    fn show_add_task(&self);

    /// Navigates to the detail screen of a task.
    fn show_task_details_ui(&self, task_id: TaskId);

    /// Confirms that a task was marked complete.
    fn show_task_marked_complete(&self);

    /// Confirms that a task was marked active.
    fn show_task_marked_active(&self);

    /// Confirms that completed tasks were cleared.
    fn show_completed_tasks_cleared(&self);

    /// Reports that tasks could not be loaded.
    fn show_loading_tasks_error(&self);

    /// Confirms that a new task was saved by the add-task screen.
    fn show_successfully_saved_message(&self);

    /// Returns `false` once the view is detached and must not receive
    /// further results.
    fn is_active(&self) -> bool;
}

impl<T: TasksView + ?Sized> TasksView for Arc<T> {
    fn set_loading_indicator(&self, active: bool) {
        (**self).set_loading_indicator(active);
    }

    fn show_tasks(&self, tasks: &[Task]) {
        (**self).show_tasks(tasks);
    }

    fn show_filter_label(&self, filter: TasksFilterType) {
        (**self).show_filter_label(filter);
    }

    fn show_add_task(&self) {
        (**self).show_add_task();
    }

    fn show_task_details_ui(&self, task_id: TaskId) {
        (**self).show_task_details_ui(task_id);
    }

    fn show_task_marked_complete(&self) {
        (**self).show_task_marked_complete();
    }

    fn show_task_marked_active(&self) {
        (**self).show_task_marked_active();
    }

    fn show_completed_tasks_cleared(&self) {
        (**self).show_completed_tasks_cleared();
    }

    fn show_loading_tasks_error(&self) {
        (**self).show_loading_tasks_error();
    }

    fn show_successfully_saved_message(&self) {
        (**self).show_successfully_saved_message();
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

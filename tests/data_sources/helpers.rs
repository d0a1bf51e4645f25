//! Shared fixtures for data source tests.

use async_trait::async_trait;
use taskdeck::tasks::{
    domain::{Task, TaskId},
    ports::{DataNotAvailable, DataSourceResult, TasksDataSource},
};

/// One active task followed by two completed ones.
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("Title1", "Description1"),
        Task::new_completed("Title2", "Description2"),
        Task::new_completed("Title3", "Description3"),
    ]
}

/// Returns the titles of `tasks` in order.
#[must_use]
pub fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

/// Data source whose every operation fails.
#[derive(Debug, Default)]
pub struct UnavailableDataSource;

#[async_trait]
impl TasksDataSource for UnavailableDataSource {
    async fn get_tasks(&self) -> DataSourceResult<Vec<Task>> {
        Err(DataNotAvailable)
    }

    async fn get_task(&self, _id: TaskId) -> DataSourceResult<Task> {
        Err(DataNotAvailable)
    }

    async fn save_task(&self, _task: &Task) -> DataSourceResult<()> {
        Err(DataNotAvailable)
    }

    async fn complete_task(&self, _id: TaskId) -> DataSourceResult<()> {
        Err(DataNotAvailable)
    }

    async fn activate_task(&self, _id: TaskId) -> DataSourceResult<()> {
        Err(DataNotAvailable)
    }

    async fn clear_completed_tasks(&self) -> DataSourceResult<()> {
        Err(DataNotAvailable)
    }

    async fn refresh_tasks(&self) {}

    async fn delete_task(&self, _id: TaskId) -> DataSourceResult<()> {
        Err(DataNotAvailable)
    }

    async fn delete_all_tasks(&self) -> DataSourceResult<()> {
        Err(DataNotAvailable)
    }
}

//! In-memory task data source.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::{debug, warn};

use crate::tasks::{
    domain::{Task, TaskId},
    ports::{DataNotAvailable, DataSourceResult, TasksDataSource},
};

/// Thread-safe in-memory task list.
///
/// Tasks keep insertion order. An optional latency delays every operation,
/// which lets the same type stand in for a remote service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTasksDataSource {
    tasks: Arc<RwLock<Vec<Task>>>,
    latency: Option<Duration>,
}

impl InMemoryTasksDataSource {
    /// Creates an empty data source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a data source seeded with `tasks`, in order.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks.into_iter().collect())),
            latency: None,
        }
    }

    /// Delays every operation by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn read(&self) -> DataSourceResult<RwLockReadGuard<'_, Vec<Task>>> {
        self.tasks.read().map_err(|err| {
            warn!(error = %err, "in-memory task list lock poisoned");
            DataNotAvailable
        })
    }

    fn write(&self) -> DataSourceResult<RwLockWriteGuard<'_, Vec<Task>>> {
        self.tasks.write().map_err(|err| {
            warn!(error = %err, "in-memory task list lock poisoned");
            DataNotAvailable
        })
    }

    fn update_task(&self, id: TaskId, update: impl FnOnce(&mut Task)) -> DataSourceResult<()> {
        let mut tasks = self.write()?;
        match tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => update(task),
            None => debug!(task_id = %id, "ignoring update for unknown task"),
        }
        Ok(())
    }
}

#[async_trait]
impl TasksDataSource for InMemoryTasksDataSource {
    async fn get_tasks(&self) -> DataSourceResult<Vec<Task>> {
        self.simulate_latency().await;
        Ok(self.read()?.clone())
    }

    async fn get_task(&self, id: TaskId) -> DataSourceResult<Task> {
        self.simulate_latency().await;
        self.read()?
            .iter()
            .find(|task| task.id() == id)
            .cloned()
            .ok_or(DataNotAvailable)
    }

    async fn save_task(&self, task: &Task) -> DataSourceResult<()> {
        self.simulate_latency().await;
        let mut tasks = self.write()?;
        match tasks.iter_mut().find(|stored| stored.id() == task.id()) {
            Some(stored) => *stored = task.clone(),
            None => tasks.push(task.clone()),
        }
        Ok(())
    }

    async fn complete_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.simulate_latency().await;
        self.update_task(id, Task::complete)
    }

    async fn activate_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.simulate_latency().await;
        self.update_task(id, Task::activate)
    }

    async fn clear_completed_tasks(&self) -> DataSourceResult<()> {
        self.simulate_latency().await;
        self.write()?.retain(Task::is_active);
        Ok(())
    }

    async fn refresh_tasks(&self) {}

    async fn delete_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.simulate_latency().await;
        self.write()?.retain(|task| task.id() != id);
        Ok(())
    }

    async fn delete_all_tasks(&self) -> DataSourceResult<()> {
        self.simulate_latency().await;
        self.write()?.clear();
        Ok(())
    }
}

//! Caching repository composing a local and a remote task source.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::tasks::{
    domain::{Task, TaskId},
    ports::{DataNotAvailable, DataSourceResult, TasksDataSource},
};

#[derive(Debug, Default)]
struct Cache {
    tasks: Option<Vec<Task>>,
    dirty: bool,
}

impl Cache {
    fn replace(&mut self, tasks: &[Task]) {
        self.tasks = Some(tasks.to_vec());
        self.dirty = false;
    }

    fn fresh(&self) -> Option<&[Task]> {
        if self.dirty {
            return None;
        }
        self.tasks.as_deref()
    }

    /// Inserts or replaces `task` in a warm cache. A cold cache stays cold
    /// so it is never mistaken for the full list.
    fn upsert(&mut self, task: &Task) {
        let Some(tasks) = self.tasks.as_mut() else {
            return;
        };
        match tasks.iter_mut().find(|cached| cached.id() == task.id()) {
            Some(cached) => cached.clone_from(task),
            None => tasks.push(task.clone()),
        }
    }

    fn update(&mut self, id: TaskId, update: impl FnOnce(&mut Task)) {
        if let Some(task) = self
            .tasks
            .as_mut()
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id() == id))
        {
            update(task);
        }
    }

    fn retain(&mut self, keep: impl FnMut(&Task) -> bool) {
        if let Some(tasks) = self.tasks.as_mut() {
            tasks.retain(keep);
        }
    }
}

/// Task data source that serves reads from memory and writes through to
/// both a local and a remote source.
///
/// Reads come from the cache while it is clean. After
/// [`TasksDataSource::refresh_tasks`] the next read goes to the remote
/// source and rewrites the local one. A cold cache reads the local source
/// first and falls back to the remote source when the local one is empty
/// or unavailable.
#[derive(Debug)]
pub struct TasksRepository<L, R>
where
    L: TasksDataSource,
    R: TasksDataSource,
{
    local: Arc<L>,
    remote: Arc<R>,
    cache: Mutex<Cache>,
}

impl<L, R> TasksRepository<L, R>
where
    L: TasksDataSource,
    R: TasksDataSource,
{
    /// Creates a repository with a cold cache.
    #[must_use]
    pub fn new(local: Arc<L>, remote: Arc<R>) -> Self {
        Self {
            local,
            remote,
            cache: Mutex::new(Cache::default()),
        }
    }

    fn cache(&self) -> DataSourceResult<MutexGuard<'_, Cache>> {
        self.cache.lock().map_err(|err| {
            warn!(error = %err, "task cache lock poisoned");
            DataNotAvailable
        })
    }

    fn cached_tasks(&self) -> DataSourceResult<Option<Vec<Task>>> {
        Ok(self.cache()?.fresh().map(<[Task]>::to_vec))
    }

    async fn load_from_remote(&self) -> DataSourceResult<Vec<Task>> {
        let tasks = self.remote.get_tasks().await?;
        self.cache()?.replace(&tasks);
        self.rewrite_local(&tasks).await;
        Ok(tasks)
    }

    async fn rewrite_local(&self, tasks: &[Task]) {
        if self.local.delete_all_tasks().await.is_err() {
            warn!("could not clear local task store before resync");
            return;
        }
        for task in tasks {
            if self.local.save_task(task).await.is_err() {
                warn!(task_id = %task.id(), "could not resync task into local store");
            }
        }
    }
}

#[async_trait]
impl<L, R> TasksDataSource for TasksRepository<L, R>
where
    L: TasksDataSource,
    R: TasksDataSource,
{
    async fn get_tasks(&self) -> DataSourceResult<Vec<Task>> {
        if let Some(tasks) = self.cached_tasks()? {
            debug!(count = tasks.len(), "serving tasks from cache");
            return Ok(tasks);
        }

        let dirty = self.cache()?.dirty;
        if dirty {
            debug!("task cache dirty, loading from remote source");
            return self.load_from_remote().await;
        }

        match self.local.get_tasks().await {
            Ok(tasks) if !tasks.is_empty() => {
                self.cache()?.replace(&tasks);
                Ok(tasks)
            }
            Ok(_) | Err(DataNotAvailable) => {
                debug!("local task store empty or unavailable, loading from remote source");
                self.load_from_remote().await
            }
        }
    }

    async fn get_task(&self, id: TaskId) -> DataSourceResult<Task> {
        let cached = self
            .cache()?
            .tasks
            .as_ref()
            .and_then(|tasks| tasks.iter().find(|task| task.id() == id).cloned());
        if let Some(task) = cached {
            return Ok(task);
        }

        let task = match self.local.get_task(id).await {
            Ok(task) => task,
            Err(DataNotAvailable) => self.remote.get_task(id).await?,
        };
        self.cache()?.upsert(&task);
        Ok(task)
    }

    async fn save_task(&self, task: &Task) -> DataSourceResult<()> {
        self.remote.save_task(task).await?;
        self.local.save_task(task).await?;
        self.cache()?.upsert(task);
        Ok(())
    }

    async fn complete_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.remote.complete_task(id).await?;
        self.local.complete_task(id).await?;
        self.cache()?.update(id, Task::complete);
        Ok(())
    }

    async fn activate_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.remote.activate_task(id).await?;
        self.local.activate_task(id).await?;
        self.cache()?.update(id, Task::activate);
        Ok(())
    }

    async fn clear_completed_tasks(&self) -> DataSourceResult<()> {
        self.remote.clear_completed_tasks().await?;
        self.local.clear_completed_tasks().await?;
        self.cache()?.retain(Task::is_active);
        Ok(())
    }

    async fn refresh_tasks(&self) {
        match self.cache() {
            Ok(mut cache) => cache.dirty = true,
            Err(DataNotAvailable) => warn!("could not mark task cache dirty"),
        }
    }

    async fn delete_task(&self, id: TaskId) -> DataSourceResult<()> {
        self.remote.delete_task(id).await?;
        self.local.delete_task(id).await?;
        self.cache()?.retain(|task| task.id() != id);
        Ok(())
    }

    async fn delete_all_tasks(&self) -> DataSourceResult<()> {
        self.remote.delete_all_tasks().await?;
        self.local.delete_all_tasks().await?;
        self.cache()?.replace(&[]);
        Ok(())
    }
}

//! Data source port for task storage.

use crate::tasks::domain::{Task, TaskId};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for data source operations.
pub type DataSourceResult<T> = Result<T, DataNotAvailable>;

/// The only failure a data source reports.
///
/// Unknown identifiers on reads, I/O failures and corrupt storage all
/// collapse into this signal. Adapters log the underlying cause before
/// returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task data not available")]
pub struct DataNotAvailable;

/// Asynchronous task storage contract.
#[async_trait]
pub trait TasksDataSource: Send + Sync {
    /// Loads every task in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`DataNotAvailable`] when the store cannot be read.
    async fn get_tasks(&self) -> DataSourceResult<Vec<Task>>;

    /// Loads a single task.
    ///
    /// # Errors
    ///
    /// Returns [`DataNotAvailable`] when the task is unknown or the store
    /// cannot be read.
    async fn get_task(&self, id: TaskId) -> DataSourceResult<Task>;

    /// Inserts a task, or replaces the stored task with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DataNotAvailable`] when the store cannot be written.
    async fn save_task(&self, task: &Task) -> DataSourceResult<()>;

    /// Marks a task as completed. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DataNotAvailable`] when the store cannot be written.
    async fn complete_task(&self, id: TaskId) -> DataSourceResult<()>;

    /// Marks a task as active. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DataNotAvailable`] when the store cannot be written.
    async fn activate_task(&self, id: TaskId) -> DataSourceResult<()>;

    /// Removes every completed task.
    ///
    /// # Errors
    ///
    /// Returns [`DataNotAvailable`] when the store cannot be written.
    async fn clear_completed_tasks(&self) -> DataSourceResult<()>;

    /// Asks the source to bypass any cached state on the next read.
    ///
    /// Leaf sources have nothing to invalidate and treat this as a no-op.
    async fn refresh_tasks(&self);

    /// Removes a single task. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DataNotAvailable`] when the store cannot be written.
    async fn delete_task(&self, id: TaskId) -> DataSourceResult<()>;

    /// Removes every task.
    ///
    /// # Errors
    ///
    /// Returns [`DataNotAvailable`] when the store cannot be written.
    async fn delete_all_tasks(&self) -> DataSourceResult<()>;
}

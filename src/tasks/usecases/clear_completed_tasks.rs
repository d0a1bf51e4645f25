//! Removes completed tasks.

use async_trait::async_trait;
use std::sync::Arc;

use super::UseCase;
use crate::tasks::ports::{DataSourceResult, TasksDataSource};

/// Removes every completed task from the data source.
#[derive(Debug)]
pub struct ClearCompleteTasks<D: TasksDataSource> {
    data_source: Arc<D>,
}

impl<D: TasksDataSource> ClearCompleteTasks<D> {
    /// Creates the use case over `data_source`.
    #[must_use]
    pub const fn new(data_source: Arc<D>) -> Self {
        Self { data_source }
    }
}

#[async_trait]
impl<D: TasksDataSource + 'static> UseCase for ClearCompleteTasks<D> {
    type Request = ();
    type Response = ();

    async fn execute(&self, _request: ()) -> DataSourceResult<()> {
        self.data_source.clear_completed_tasks().await
    }
}

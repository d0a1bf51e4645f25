//! Loads the task list through a filter.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::UseCase;
use crate::tasks::{
    domain::{Task, TasksFilterType},
    ports::{DataSourceResult, TasksDataSource},
};

/// Request for [`GetTasks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTasksRequest {
    /// Ask the data source to bypass its cache before reading.
    pub force_update: bool,
    /// Filter applied to the loaded list.
    pub filter: TasksFilterType,
}

impl GetTasksRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(force_update: bool, filter: TasksFilterType) -> Self {
        Self {
            force_update,
            filter,
        }
    }
}

/// Response of [`GetTasks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTasksResponse {
    /// Filtered tasks in storage order.
    pub tasks: Vec<Task>,
}

/// Loads every task and keeps the ones matching the requested filter.
#[derive(Debug)]
pub struct GetTasks<D: TasksDataSource> {
    data_source: Arc<D>,
}

impl<D: TasksDataSource> GetTasks<D> {
    /// Creates the use case over `data_source`.
    #[must_use]
    pub const fn new(data_source: Arc<D>) -> Self {
        Self { data_source }
    }
}

#[async_trait]
impl<D: TasksDataSource + 'static> UseCase for GetTasks<D> {
    type Request = GetTasksRequest;
    type Response = GetTasksResponse;

    async fn execute(&self, request: GetTasksRequest) -> DataSourceResult<GetTasksResponse> {
        if request.force_update {
            self.data_source.refresh_tasks().await;
        }
        let loaded = self.data_source.get_tasks().await?;
        let tasks = request.filter.filter(loaded);
        debug!(filter = %request.filter, count = tasks.len(), "tasks loaded");
        Ok(GetTasksResponse { tasks })
    }
}

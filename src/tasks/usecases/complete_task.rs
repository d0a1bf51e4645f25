//! Marks a task as completed.

use async_trait::async_trait;
use std::sync::Arc;

use super::UseCase;
use crate::tasks::{
    domain::TaskId,
    ports::{DataSourceResult, TasksDataSource},
};

/// Request for [`CompleteTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteTaskRequest {
    /// Task to complete.
    pub task_id: TaskId,
}

/// Marks a task as completed. Completing an unknown or already completed
/// task succeeds without effect.
#[derive(Debug)]
pub struct CompleteTask<D: TasksDataSource> {
    data_source: Arc<D>,
}

impl<D: TasksDataSource> CompleteTask<D> {
    /// Creates the use case over `data_source`.
    #[must_use]
    pub const fn new(data_source: Arc<D>) -> Self {
        Self { data_source }
    }
}

#[async_trait]
impl<D: TasksDataSource + 'static> UseCase for CompleteTask<D> {
    type Request = CompleteTaskRequest;
    type Response = ();

    async fn execute(&self, request: CompleteTaskRequest) -> DataSourceResult<()> {
        self.data_source.complete_task(request.task_id).await
    }
}

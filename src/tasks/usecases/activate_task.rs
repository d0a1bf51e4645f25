//! Marks a task as active.

use async_trait::async_trait;
use std::sync::Arc;

use super::UseCase;
use crate::tasks::{
    domain::TaskId,
    ports::{DataSourceResult, TasksDataSource},
};

/// Request for [`ActivateTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivateTaskRequest {
    /// Task to reactivate.
    pub task_id: TaskId,
}

/// Marks a task as active again. Activating an unknown or already active
/// task succeeds without effect.
#[derive(Debug)]
pub struct ActivateTask<D: TasksDataSource> {
    data_source: Arc<D>,
}

impl<D: TasksDataSource> ActivateTask<D> {
    /// Creates the use case over `data_source`.
    #[must_use]
    pub const fn new(data_source: Arc<D>) -> Self {
        Self { data_source }
    }
}

#[async_trait]
impl<D: TasksDataSource + 'static> UseCase for ActivateTask<D> {
    type Request = ActivateTaskRequest;
    type Response = ();

    async fn execute(&self, request: ActivateTaskRequest) -> DataSourceResult<()> {
        self.data_source.activate_task(request.task_id).await
    }
}

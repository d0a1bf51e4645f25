//! Runs use cases through a scheduler and returns their results.

use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::{InlineScheduler, Job, UseCaseScheduler};
use crate::tasks::{
    ports::{DataNotAvailable, DataSourceResult},
    usecases::UseCase,
};

/// Dispatches use cases and delivers each result back to the awaiting
/// caller, wherever the scheduler chose to run the work.
#[derive(Clone)]
pub struct UseCaseHandler {
    scheduler: Arc<dyn UseCaseScheduler>,
}

impl UseCaseHandler {
    /// Creates a handler over `scheduler`.
    #[must_use]
    pub fn new(scheduler: Arc<dyn UseCaseScheduler>) -> Self {
        Self { scheduler }
    }

    /// Creates a handler that runs use cases on the calling task.
    #[must_use]
    pub fn inline() -> Self {
        Self::new(Arc::new(InlineScheduler))
    }

    /// Runs `use_case` with `request`.
    ///
    /// # Errors
    ///
    /// Returns the use case's own [`DataNotAvailable`], or
    /// [`DataNotAvailable`] when the scheduler dropped the job before it
    /// produced a result.
    pub async fn execute<U: UseCase>(
        &self,
        use_case: &Arc<U>,
        request: U::Request,
    ) -> DataSourceResult<U::Response> {
        let (sender, receiver) = oneshot::channel();
        let worker = Arc::clone(use_case);
        let job: Job = Box::pin(async move {
            let result = worker.execute(request).await;
            if sender.send(result).is_err() {
                debug!("use case caller went away before its result arrived");
            }
        });

        self.scheduler.schedule(job).await;
        receiver.await.map_err(|_| {
            warn!("use case job was dropped before completing");
            DataNotAvailable
        })?
    }
}

impl fmt::Debug for UseCaseHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseCaseHandler").finish_non_exhaustive()
    }
}
